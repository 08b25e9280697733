//! Heuristic functions for A*.
//!
//! A heuristic is any `Fn(&P::State, &P) -> i64` returning a non-negative
//! estimate of the remaining cost. Plain functions qualify through the
//! blanket [`Heuristic`] impl, so `null_heuristic::<P>` can be handed to the
//! engine directly.
//!
//! The quest heuristics (`single`, `better`, `gen`) need a state exposing
//! an agent position plus remaining objectives, and a problem exposing its
//! per-direction step costs. All of them return 0 at a goal state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contract::{DirectionalCosts, ObjectiveState, Problem};
use crate::direction::{Position, StepCosts};

/// Estimate of the remaining cost from a state.
pub trait Heuristic<P: Problem> {
    fn estimate(&self, state: &P::State, problem: &P) -> i64;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem,
    F: Fn(&P::State, &P) -> i64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> i64 {
        self(state, problem)
    }
}

/// Always 0. Turns A* into uniform-cost search.
pub fn null_heuristic<P: Problem>(_state: &P::State, _problem: &P) -> i64 {
    0
}

/// `|x1 - x2| + |y1 - y2|`.
#[must_use]
pub fn manhattan_distance(a: Position, b: Position) -> i64 {
    i64::from(a.x.abs_diff(b.x)) + i64::from(a.y.abs_diff(b.y))
}

/// Cost of walking from `from` to `to` without detours, pricing each step
/// by the direction it is taken in. Saturates at `i64::MAX`.
#[must_use]
pub fn directional_cost(from: Position, to: Position, costs: &StepCosts) -> i64 {
    let horizontal = if from.x > to.x { costs.west } else { costs.east };
    let vertical = if from.y > to.y { costs.north } else { costs.south };
    let across = i64::from(from.x.abs_diff(to.x)).saturating_mul(horizontal);
    let down = i64::from(from.y.abs_diff(to.y)).saturating_mul(vertical);
    across.saturating_add(down)
}

/// Manhattan distance to the first remaining objective.
///
/// Admissible while every step costs at least 1.
pub fn single_heuristic<P>(state: &P::State, problem: &P) -> i64
where
    P: Problem,
    P::State: ObjectiveState,
{
    if problem.is_goal(state) {
        return 0;
    }
    state
        .remaining_objectives()
        .first()
        .map_or(0, |&target| manhattan_distance(state.position(), target))
}

/// Direction-weighted cost to the first remaining objective.
pub fn better_heuristic<P>(state: &P::State, problem: &P) -> i64
where
    P: Problem + DirectionalCosts,
    P::State: ObjectiveState,
{
    if problem.is_goal(state) {
        return 0;
    }
    state.remaining_objectives().first().map_or(0, |&target| {
        directional_cost(state.position(), target, problem.step_costs())
    })
}

/// Largest direction-weighted cost to any remaining objective.
///
/// Every objective must still be visited, so the cost of reaching the
/// farthest one is a lower bound on the cost of finishing.
pub fn gen_heuristic<P>(state: &P::State, problem: &P) -> i64
where
    P: Problem + DirectionalCosts,
    P::State: ObjectiveState,
{
    if problem.is_goal(state) {
        return 0;
    }
    let from = state.position();
    let costs = problem.step_costs();
    state
        .remaining_objectives()
        .iter()
        .map(|&target| directional_cost(from, target, costs))
        .max()
        .unwrap_or(0)
}

/// Named heuristic selection for configuration surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    Null,
    Single,
    Better,
    #[default]
    Gen,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Null,
        HeuristicKind::Single,
        HeuristicKind::Better,
        HeuristicKind::Gen,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HeuristicKind::Null => "null",
            HeuristicKind::Single => "single",
            HeuristicKind::Better => "better",
            HeuristicKind::Gen => "gen",
        }
    }

    /// Evaluate the selected heuristic.
    pub fn evaluate<P>(self, state: &P::State, problem: &P) -> i64
    where
        P: Problem + DirectionalCosts,
        P::State: ObjectiveState,
    {
        match self {
            HeuristicKind::Null => null_heuristic(state, problem),
            HeuristicKind::Single => single_heuristic(state, problem),
            HeuristicKind::Better => better_heuristic(state, problem),
            HeuristicKind::Gen => gen_heuristic(state, problem),
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeuristicKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown heuristic '{s}' (expected null, single, better or gen)"))
    }
}
