//! Quest harness: the grid world and the plumbing around the search core.
//!
//! The harness parses textual quest grids, turns them into a
//! [`quest_search::Problem`], runs the configured heuristic and policy
//! through [`quest_search::search`] and packages the outcome as a
//! [`runner::SolveReport`].
//!
//! The harness does NOT implement search logic; it delegates to
//! `quest_search`. Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod digest;
pub mod grid;
pub mod runner;
pub mod worlds;

pub use config::{ConfigError, QuestConfig};
pub use grid::{Grid, GridError};
pub use runner::{solve, solve_grid, RunError, SolveReport};
pub use worlds::quest::{QuestProblem, QuestState};
