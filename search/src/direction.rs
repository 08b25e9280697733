//! Compass directions, grid positions and per-direction step costs.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` grows eastward (columns), `y` grows southward (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The four movement directions of the quest domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(dx, dy)` for one step. North decreases `y`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost of a single step in each direction.
///
/// Missing fields in a serialized config fall back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepCosts {
    pub north: i64,
    pub south: i64,
    pub east: i64,
    pub west: i64,
}

impl StepCosts {
    /// Same cost in every direction.
    #[must_use]
    pub const fn uniform(cost: i64) -> Self {
        Self {
            north: cost,
            south: cost,
            east: cost,
            west: cost,
        }
    }

    #[must_use]
    pub const fn get(&self, direction: Direction) -> i64 {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Smallest per-step cost over all directions.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.north.min(self.south).min(self.east).min(self.west)
    }
}

impl Default for StepCosts {
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl Index<Direction> for StepCosts {
    type Output = i64;

    fn index(&self, direction: Direction) -> &i64 {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }
}
