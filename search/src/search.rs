//! A* entry points and the expansion loop.

use std::collections::HashSet;
use std::rc::Rc;

use serde::Serialize;

use crate::contract::{Problem, Successor};
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::heuristics::Heuristic;
use crate::node::{NodeRef, SearchNode};
use crate::policy::SearchPolicy;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// A goal state was popped from the frontier.
    GoalReached,
    /// Frontier emptied without reaching a goal: no solution exists.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TerminationReason::GoalReached => "goal_reached",
            TerminationReason::FrontierExhausted => "frontier_exhausted",
            TerminationReason::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States expanded (each at most once).
    pub expansions: u64,
    /// Successors returned by `expand`.
    pub generated: u64,
    /// Children pushed onto the frontier.
    pub pushed: u64,
    /// Children the re-insertion rule kept off the frontier.
    pub suppressed: u64,
    /// Pops of states that were already closed.
    pub stale_pops: u64,
    /// Size of the closed set at termination.
    pub closed: usize,
    /// High-water mark of frontier size.
    pub frontier_high_water: usize,
}

/// Result of a search execution.
#[derive(Debug)]
pub struct SearchOutcome<S, A> {
    /// The goal node (if found).
    pub goal: Option<NodeRef<S, A>>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl<S, A: Clone> SearchOutcome<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Root-to-goal actions, if a goal was reached.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<A>> {
        self.goal.as_ref().map(|n| n.solution())
    }

    /// Path cost of the goal node, if a goal was reached.
    #[must_use]
    pub fn total_cost(&self) -> Option<i64> {
        self.goal.as_ref().map(|n| n.cumulative_cost())
    }
}

/// Run A* with the default policy and return the action sequence.
///
/// `Ok(None)` means the frontier was exhausted: no solution exists.
///
/// # Errors
///
/// See [`search`].
pub fn astar<P, H>(problem: &P, heuristic: &H) -> Result<Option<Vec<P::Action>>, SearchError>
where
    P: Problem,
    H: Heuristic<P> + ?Sized,
{
    search(problem, heuristic, &SearchPolicy::default()).map(|outcome| outcome.solution())
}

/// Run A* graph search from `problem.start_state()`.
///
/// Frontier priority is `f = h(state) + g`. The first goal popped from the
/// frontier is returned; with an admissible heuristic its cost is minimal.
/// Every state is expanded at most once.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if the policy fails validation.
/// - [`SearchError::InvalidCost`] / [`SearchError::InvalidHeuristic`] when
///   `policy.validate_costs` is set and the problem or heuristic yields a
///   negative value.
pub fn search<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem,
    H: Heuristic<P> + ?Sized,
{
    policy.validate()?;

    let mut closed: HashSet<P::State> = HashSet::new();
    let mut frontier: PriorityFrontier<P::State, P::Action> = PriorityFrontier::new();
    let mut stats = SearchStats::default();

    let start = problem.start_state();
    let h_start = estimate(heuristic, &start, problem, policy)?;
    frontier.push(Rc::new(SearchNode::root(start)), h_start);
    tracing::debug!(h_start, ?policy, "search started");

    let mut termination = TerminationReason::FrontierExhausted;
    let mut goal = None;

    while !frontier.is_empty() {
        let (node, priority) = frontier.pop()?;

        if problem.is_goal(node.state()) {
            termination = TerminationReason::GoalReached;
            goal = Some(node);
            break;
        }

        if closed.contains(node.state()) {
            stats.stale_pops += 1;
            continue;
        }

        if policy.max_expansions.is_some_and(|max| stats.expansions >= max) {
            termination = TerminationReason::ExpansionBudgetExceeded;
            break;
        }

        closed.insert(node.state().clone());
        stats.expansions += 1;
        tracing::trace!(
            priority,
            g = node.cumulative_cost(),
            depth = node.depth(),
            "expanding"
        );

        for Successor {
            state,
            action,
            cost,
        } in problem.expand(node.state())
        {
            stats.generated += 1;
            if policy.validate_costs && cost < 0 {
                return Err(SearchError::InvalidCost {
                    cost,
                    depth: node.depth(),
                });
            }

            let g = node.cumulative_cost().saturating_add(cost);
            let f = estimate(heuristic, &state, problem, policy)?.saturating_add(g);
            if policy.reinsert.admits(frontier.best_priority(&state), f, g) {
                frontier.push(Rc::new(SearchNode::child(&node, state, action, g)), f);
                stats.pushed += 1;
            } else {
                stats.suppressed += 1;
            }
        }
    }

    stats.closed = closed.len();
    stats.frontier_high_water = frontier.high_water();
    tracing::debug!(
        termination = termination.as_str(),
        cost = ?goal.as_ref().map(|n| n.cumulative_cost()),
        expansions = stats.expansions,
        generated = stats.generated,
        "search finished"
    );

    Ok(SearchOutcome {
        goal,
        termination,
        stats,
    })
}

fn estimate<P, H>(
    heuristic: &H,
    state: &P::State,
    problem: &P,
    policy: &SearchPolicy,
) -> Result<i64, SearchError>
where
    P: Problem,
    H: Heuristic<P> + ?Sized,
{
    let value = heuristic.estimate(state, problem);
    if policy.validate_costs && value < 0 {
        return Err(SearchError::InvalidHeuristic { value });
    }
    Ok(value)
}
