//! Harness runner: grid text in, solve report out.
//!
//! # Pipeline
//!
//! ```text
//! Grid::parse() → digest → QuestProblem::new()
//!   → search(problem, config.heuristic, config.policy) → SolveReport
//! ```
//!
//! The runner owns no search logic; it wires the configured heuristic and
//! policy into [`quest_search::search`] and packages the outcome.

use std::fmt;

use quest_search::{
    search, Direction, HeuristicKind, Position, SearchError, SearchStats, TerminationReason,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, QuestConfig};
use crate::digest::{canonical_hash, ContentHash, DOMAIN_GRID, DOMAIN_SOLUTION};
use crate::grid::{Grid, GridError};
use crate::worlds::quest::{QuestProblem, QuestState};

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("grid: {0}")]
    Grid(#[from] GridError),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("search: {0}")]
    Search(#[from] SearchError),
    #[error("report serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything a single solve produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Hash of the normalized grid text.
    pub grid_digest: ContentHash,
    pub width: usize,
    pub height: usize,
    pub objectives: usize,
    pub heuristic: HeuristicKind,
    pub termination: TerminationReason,
    /// Root-to-goal actions; `None` unless the quest was solved.
    pub actions: Option<Vec<Direction>>,
    /// Positions visited, starting with the start cell.
    pub path: Option<Vec<Position>>,
    pub total_cost: Option<i64>,
    /// Hash of the canonical JSON of `actions`.
    pub solution_digest: Option<ContentHash>,
    pub stats: SearchStats,
}

impl SolveReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "grid: {}x{} ({})", self.width, self.height, self.grid_digest)?;
        writeln!(f, "objectives: {}", self.objectives)?;
        writeln!(f, "heuristic: {}", self.heuristic)?;
        writeln!(f, "termination: {}", self.termination.as_str())?;
        match (&self.actions, self.total_cost) {
            (Some(actions), Some(cost)) => {
                let names: Vec<&str> = actions.iter().map(|d| d.as_str()).collect();
                writeln!(f, "cost: {cost}")?;
                writeln!(f, "steps: {}", actions.len())?;
                writeln!(f, "actions: {}", names.join(" "))?;
            }
            _ => writeln!(f, "no solution")?,
        }
        write!(
            f,
            "expansions: {} generated: {} frontier high water: {}",
            self.stats.expansions, self.stats.generated, self.stats.frontier_high_water
        )
    }
}

/// Parse `grid_text` and solve it under `config`.
///
/// # Errors
///
/// Returns [`RunError`] if the grid or config is invalid, or if the search
/// rejects the problem.
pub fn solve(grid_text: &str, config: &QuestConfig) -> Result<SolveReport, RunError> {
    let grid = Grid::parse(grid_text)?;
    solve_grid(grid, config)
}

/// Solve an already parsed grid.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_grid(grid: Grid, config: &QuestConfig) -> Result<SolveReport, RunError> {
    config.validate()?;

    let grid_digest = canonical_hash(DOMAIN_GRID, grid.to_string().as_bytes());
    let span = tracing::info_span!("solve", grid = %grid_digest, heuristic = %config.heuristic);
    let _guard = span.enter();

    let (width, height, objectives) = (grid.width(), grid.height(), grid.objectives().len());
    let problem = QuestProblem::new(grid, config.step_costs);
    let kind = config.heuristic;
    let heuristic = move |state: &QuestState, problem: &QuestProblem| kind.evaluate(state, problem);

    let outcome = search(&problem, &heuristic, &config.policy)?;

    let actions = outcome.solution();
    let path = outcome
        .goal
        .as_ref()
        .map(|node| node.path().into_iter().map(|s| s.position).collect());
    let solution_digest = match &actions {
        Some(actions) => Some(canonical_hash(
            DOMAIN_SOLUTION,
            &serde_json::to_vec(actions)?,
        )),
        None => None,
    };

    let report = SolveReport {
        grid_digest,
        width,
        height,
        objectives,
        heuristic: kind,
        termination: outcome.termination,
        total_cost: outcome.total_cost(),
        actions,
        path,
        solution_digest,
        stats: outcome.stats,
    };

    tracing::info!(
        termination = report.termination.as_str(),
        cost = ?report.total_cost,
        expansions = report.stats.expansions,
        "solve finished"
    );
    Ok(report)
}
