//! Small problems shared by unit tests.

use std::collections::BTreeMap;

use crate::contract::{DirectionalCosts, ObjectiveState, Problem, Successor};
use crate::direction::{Direction, Position, StepCosts};

/// Obstacle-free rectangular field with objectives to collect.
pub struct OpenField {
    width: i32,
    height: i32,
    start: Position,
    objectives: Vec<Position>,
    costs: StepCosts,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldState {
    position: Position,
    remaining: Vec<Position>,
}

impl FieldState {
    pub fn new(position: (i32, i32), remaining: Vec<(i32, i32)>) -> Self {
        Self {
            position: position.into(),
            remaining: remaining.into_iter().map(Position::from).collect(),
        }
    }
}

impl ObjectiveState for FieldState {
    fn position(&self) -> Position {
        self.position
    }

    fn remaining_objectives(&self) -> &[Position] {
        &self.remaining
    }
}

impl OpenField {
    pub fn new(
        width: i32,
        height: i32,
        start: (i32, i32),
        objectives: &[(i32, i32)],
        costs: StepCosts,
    ) -> Self {
        Self {
            width,
            height,
            start: start.into(),
            objectives: objectives.iter().copied().map(Position::from).collect(),
            costs,
        }
    }

    fn in_bounds(&self, p: Position) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }
}

impl Problem for OpenField {
    type State = FieldState;
    type Action = Direction;

    fn start_state(&self) -> FieldState {
        let mut remaining = self.objectives.clone();
        remaining.retain(|&o| o != self.start);
        FieldState {
            position: self.start,
            remaining,
        }
    }

    fn is_goal(&self, state: &FieldState) -> bool {
        state.remaining.is_empty()
    }

    fn expand(&self, state: &FieldState) -> Vec<Successor<FieldState, Direction>> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| {
                let next = state.position.step(d);
                if !self.in_bounds(next) {
                    return None;
                }
                let mut remaining = state.remaining.clone();
                remaining.retain(|&o| o != next);
                Some(Successor::new(
                    FieldState {
                        position: next,
                        remaining,
                    },
                    d,
                    self.costs[d],
                ))
            })
            .collect()
    }
}

impl DirectionalCosts for OpenField {
    fn step_costs(&self) -> &StepCosts {
        &self.costs
    }
}

/// Explicit weighted digraph over `char` vertices; actions are edge labels.
pub struct Digraph {
    start: char,
    goals: Vec<char>,
    edges: BTreeMap<char, Vec<(char, &'static str, i64)>>,
}

impl Digraph {
    pub fn new(start: char, goals: &[char], edges: &[(char, char, &'static str, i64)]) -> Self {
        let mut adjacency: BTreeMap<char, Vec<(char, &'static str, i64)>> = BTreeMap::new();
        for &(from, to, label, cost) in edges {
            adjacency.entry(from).or_default().push((to, label, cost));
        }
        Self {
            start,
            goals: goals.to_vec(),
            edges: adjacency,
        }
    }
}

impl Problem for Digraph {
    type State = char;
    type Action = &'static str;

    fn start_state(&self) -> char {
        self.start
    }

    fn is_goal(&self, state: &char) -> bool {
        self.goals.contains(state)
    }

    fn expand(&self, state: &char) -> Vec<Successor<char, &'static str>> {
        self.edges
            .get(state)
            .map(|out| {
                out.iter()
                    .map(|&(to, label, cost)| Successor::new(to, label, cost))
                    .collect()
            })
            .unwrap_or_default()
    }
}
