//! Quest Search: A* graph search with pluggable admissible heuristics.
//!
//! This crate is the search core. It knows nothing about grids or files:
//! callers describe their domain through the [`Problem`] trait and pick a
//! heuristic, and the engine returns an action sequence or reports that no
//! solution exists.
//!
//! # Crate dependency graph
//!
//! ```text
//! quest_search  ←  quest_harness
//! (engine, heuristics)   (grid world, config, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`]: immutable search-tree node with parent links
//! - [`PriorityFrontier`]: min-priority queue with FIFO tie-breaking
//! - [`Problem`]: trait for searchable domains
//! - [`Heuristic`]: trait for remaining-cost estimates, implemented by plain functions
//! - [`SearchPolicy`]: re-insertion rule, validation and expansion budget
//!
//! # Example
//!
//! ```
//! use quest_search::{astar, null_heuristic, Problem, Successor};
//!
//! struct Line(u32);
//!
//! impl Problem for Line {
//!     type State = u32;
//!     type Action = &'static str;
//!
//!     fn start_state(&self) -> u32 { 0 }
//!     fn is_goal(&self, s: &u32) -> bool { *s == self.0 }
//!     fn expand(&self, s: &u32) -> Vec<Successor<u32, &'static str>> {
//!         vec![Successor::new(s + 1, "step", 1)]
//!     }
//! }
//!
//! let plan = astar(&Line(3), &null_heuristic::<Line>).unwrap();
//! assert_eq!(plan, Some(vec!["step"; 3]));
//! ```

#![forbid(unsafe_code)]

pub mod contract;
pub mod direction;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod policy;
pub mod search;

#[cfg(test)]
mod fixtures;

pub use contract::{DirectionalCosts, ObjectiveState, Problem, Successor};
pub use direction::{Direction, Position, StepCosts};
pub use error::SearchError;
pub use frontier::PriorityFrontier;
pub use heuristics::{
    better_heuristic, directional_cost, gen_heuristic, manhattan_distance, null_heuristic,
    single_heuristic, Heuristic, HeuristicKind,
};
pub use node::{FrontierKey, NodeRef, SearchNode};
pub use policy::{ReinsertPolicy, SearchPolicy};
pub use search::{astar, search, SearchOutcome, SearchStats, TerminationReason};
