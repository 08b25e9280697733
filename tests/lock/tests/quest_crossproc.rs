//! Cross-process determinism: spawns the `solve_fixture` binary under
//! environment variants and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("QUEST_HEURISTIC");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("maze.gen.grid_digest=sha256:"));
    assert!(baseline.contains("maze.gen.termination=goal_reached"));
    assert!(baseline.contains("scattered.null.solution_digest=sha256:"));
    assert!(baseline.contains("walled_off.gen.termination=frontier_exhausted"));
    assert!(baseline.contains("walled_off.gen.cost=none"));

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("QUEST_HEURISTIC", "null"),
            ("RUST_LOG", "trace"),
            ("QUEST_NOISE", "1"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");
}

#[test]
fn heuristics_agree_on_cost_across_the_fixture() {
    let out = run_variant(&workspace_root(), &[]);
    for grid in ["maze", "scattered"] {
        let costs: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with(&format!("{grid}.")) && l.contains(".cost="))
            .filter_map(|l| l.split_once('=').map(|(_, v)| v))
            .collect();
        assert_eq!(costs.len(), 4, "{grid}: {costs:?}");
        assert!(costs.iter().all(|c| *c == costs[0]), "{grid}: {costs:?}");
    }
}
