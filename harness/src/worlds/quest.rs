//! `QuestProblem`: collect every medal on a grid.
//!
//! The agent moves one cell per action in [`Direction::ALL`] order. Moves
//! off the grid or into a wall are not generated. Entering a cell that holds
//! a remaining medal collects it; the quest is complete once no medals
//! remain.

use quest_search::{
    Direction, DirectionalCosts, ObjectiveState, Position, Problem, StepCosts, Successor,
};

use crate::grid::Grid;

/// Agent position plus the medals not yet collected (row-major order).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestState {
    pub position: Position,
    pub remaining: Vec<Position>,
}

impl ObjectiveState for QuestState {
    fn position(&self) -> Position {
        self.position
    }

    fn remaining_objectives(&self) -> &[Position] {
        &self.remaining
    }
}

/// A grid quest with per-direction step costs.
#[derive(Debug, Clone)]
pub struct QuestProblem {
    grid: Grid,
    costs: StepCosts,
}

impl QuestProblem {
    #[must_use]
    pub fn new(grid: Grid, costs: StepCosts) -> Self {
        Self { grid, costs }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Problem for QuestProblem {
    type State = QuestState;
    type Action = Direction;

    fn start_state(&self) -> QuestState {
        QuestState {
            position: self.grid.start(),
            remaining: self.grid.objectives().to_vec(),
        }
    }

    fn is_goal(&self, state: &QuestState) -> bool {
        state.remaining.is_empty()
    }

    fn expand(&self, state: &QuestState) -> Vec<Successor<QuestState, Direction>> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let next = state.position.step(direction);
                if !self.grid.is_passable(next) {
                    return None;
                }
                let remaining = state
                    .remaining
                    .iter()
                    .copied()
                    .filter(|&medal| medal != next)
                    .collect();
                Some(Successor::new(
                    QuestState {
                        position: next,
                        remaining,
                    },
                    direction,
                    self.costs[direction],
                ))
            })
            .collect()
    }
}

impl DirectionalCosts for QuestProblem {
    fn step_costs(&self) -> &StepCosts {
        &self.costs
    }
}
