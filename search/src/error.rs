//! Typed search errors.
//!
//! "No solution" is not an error: it is reported as `Ok(None)` from
//! [`crate::search::astar`] or as [`crate::search::TerminationReason::FrontierExhausted`].
//! `SearchError` covers misuse of the frontier and malformed problems only.

use thiserror::Error;

/// Typed failure for search execution and pre-flight policy validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `pop` was called on an empty frontier.
    ///
    /// The engine guards every pop with `is_empty`, so surfacing this from
    /// a search run means the loop itself is broken.
    #[error("pop called on an empty frontier")]
    EmptyFrontier,

    /// A problem yielded a negative action cost.
    #[error("negative action cost {cost} expanding a node at depth {depth}")]
    InvalidCost { cost: i64, depth: u32 },

    /// A heuristic returned a negative estimate.
    #[error("heuristic returned negative estimate {value}")]
    InvalidHeuristic { value: i64 },

    /// The search policy is not usable as configured.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
