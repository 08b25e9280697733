//! `quest`: solve a quest grid from the command line.
//!
//! Exit codes: 0 when every medal was collected, 2 when no solution exists
//! (or the expansion budget ran out), 1 on any error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use quest_harness::{solve, QuestConfig};
use quest_search::HeuristicKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quest", version, about = "Collect every medal on a grid with A* search")]
struct Args {
    /// Grid file (`-` free, `W` wall, `S` start, `M` medal)
    #[arg(long, value_name = "PATH")]
    grid: PathBuf,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Heuristic: null, single, better or gen
    #[arg(long, value_name = "NAME", value_parser = parse_heuristic)]
    heuristic: Option<HeuristicKind>,

    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    cost_north: Option<i64>,
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    cost_south: Option<i64>,
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    cost_east: Option<i64>,
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    cost_west: Option<i64>,

    /// Stop after this many expansions
    #[arg(long, value_name = "N")]
    max_expansions: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_heuristic(s: &str) -> Result<HeuristicKind, String> {
    s.parse()
}

fn load_config(args: &Args) -> Result<QuestConfig> {
    let mut config = match &args.config {
        Some(path) => QuestConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => QuestConfig::default(),
    };
    config.apply_env().context("applying environment overrides")?;

    if let Some(h) = args.heuristic {
        config.heuristic = h;
    }
    let costs = &mut config.step_costs;
    for (flag, slot) in [
        (args.cost_north, &mut costs.north),
        (args.cost_south, &mut costs.south),
        (args.cost_east, &mut costs.east),
        (args.cost_west, &mut costs.west),
    ] {
        if let Some(cost) = flag {
            *slot = cost;
        }
    }
    if let Some(max) = args.max_expansions {
        config.policy.max_expansions = Some(max);
    }
    Ok(config)
}

fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let text = std::fs::read_to_string(&args.grid)
        .with_context(|| format!("reading grid {}", args.grid.display()))?;

    tracing::info!(grid = %args.grid.display(), heuristic = %config.heuristic, "solving");
    let report = solve(&text, &config)
        .with_context(|| format!("solving {}", args.grid.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(if report.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
