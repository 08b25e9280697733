//! Problem contract traits.

use std::fmt::Debug;
use std::hash::Hash;

use crate::direction::{Position, StepCosts};

/// One outgoing edge of a state: the reached state, the action taking us
/// there, and its non-negative cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: i64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: i64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// Trait for problems that support search.
///
/// # Contract
///
/// - `expand` must be deterministic: same state, same successors in the same
///   order. Frontier tie-breaking is FIFO, so enumeration order decides
///   which of several equal-cost solutions is returned.
/// - Every successor cost must be non-negative.
/// - The engine only compares and hashes states; it never inspects them.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Test whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate the successors of a state.
    fn expand(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;
}

/// Problems whose movement has a per-direction step cost.
pub trait DirectionalCosts {
    fn step_costs(&self) -> &StepCosts;
}

/// States made of an agent position and a list of objectives still to visit.
pub trait ObjectiveState {
    fn position(&self) -> Position;

    /// Remaining objectives, in the problem's canonical order.
    fn remaining_objectives(&self) -> &[Position];
}
