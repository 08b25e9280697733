//! Binary that solves the named fixture grids under every heuristic and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: one `name.heuristic.key=value` line per reported field. The
//! configuration is fixed in code; the environment is deliberately not
//! consulted.

use lock_tests::quest_fixtures::{MAZE, SCATTERED, WALLED_OFF};
use quest_harness::{solve, QuestConfig};
use quest_search::{HeuristicKind, StepCosts};

fn main() {
    let grids = [("maze", MAZE), ("scattered", SCATTERED), ("walled_off", WALLED_OFF)];
    let costs = StepCosts {
        north: 2,
        south: 1,
        east: 3,
        west: 1,
    };

    for (name, text) in grids {
        for heuristic in HeuristicKind::ALL {
            let config = QuestConfig {
                step_costs: costs,
                heuristic,
                ..QuestConfig::default()
            };
            let report = solve(text, &config).expect("fixture solve failed");
            let prefix = format!("{name}.{heuristic}");

            println!("{prefix}.grid_digest={}", report.grid_digest);
            println!("{prefix}.termination={}", report.termination.as_str());
            match (&report.total_cost, &report.solution_digest) {
                (Some(cost), Some(digest)) => {
                    println!("{prefix}.cost={cost}");
                    println!("{prefix}.solution_digest={digest}");
                }
                _ => println!("{prefix}.cost=none"),
            }
            println!("{prefix}.expansions={}", report.stats.expansions);
            println!("{prefix}.generated={}", report.stats.generated);
        }
    }
}
