//! Textual quest grids.
//!
//! One row per line, one cell per character:
//!
//! | symbol | cell |
//! |---|---|
//! | `-` | free |
//! | `W` | obstacle (wall) |
//! | `S` | start (free, exactly one) |
//! | `M` | objective (medal, free) |
//!
//! Carriage returns and trailing blank lines are ignored. Every row must have
//! the width of the first row.

use std::fmt;

use quest_search::Position;
use thiserror::Error;

/// Grid parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("grid has no start cell 'S'")]
    MissingStart,
    #[error("grid has more than one start cell (second at row {row}, column {col})")]
    MultipleStarts { row: usize, col: usize },
    #[error("grid dimension {0} does not fit in a coordinate")]
    TooLarge(usize),
}

/// Terrain of a single cell. Start and objectives sit on free cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Obstacle,
}

/// A parsed, rectangular quest grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    objectives: Vec<Position>,
}

impl Grid {
    /// Parse a grid from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] when the text is empty, ragged, contains an
    /// unknown symbol, or does not have exactly one start.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|r| r.trim().is_empty()) {
            rows.pop();
        }
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };

        let width = first.chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        i32::try_from(width).map_err(|_| GridError::TooLarge(width))?;
        i32::try_from(height).map_err(|_| GridError::TooLarge(height))?;

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut objectives = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let pos = coords(col, row);
                let cell = match symbol {
                    '-' => Cell::Free,
                    'W' => Cell::Obstacle,
                    'S' => {
                        if start.is_some() {
                            return Err(GridError::MultipleStarts { row, col });
                        }
                        start = Some(pos);
                        Cell::Free
                    }
                    'M' => {
                        objectives.push(pos);
                        Cell::Free
                    }
                    _ => return Err(GridError::UnknownSymbol { symbol, row, col }),
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            start: start.ok_or(GridError::MissingStart)?,
            objectives,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Objective positions in row-major order.
    #[must_use]
    pub fn objectives(&self) -> &[Position] {
        &self.objectives
    }

    /// Cell at `pos`, or `None` when `pos` is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        let col = usize::try_from(pos.x).ok()?;
        let row = usize::try_from(pos.y).ok()?;
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// `true` when `pos` is inside the grid and not an obstacle.
    #[must_use]
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Free)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = coords(col, row);
                let symbol = if pos == self.start {
                    'S'
                } else if self.objectives.contains(&pos) {
                    'M'
                } else if self.cells[row * self.width + col] == Cell::Obstacle {
                    'W'
                } else {
                    '-'
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Dimensions are checked against i32 in `parse`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn coords(col: usize, row: usize) -> Position {
    Position::new(col as i32, row as i32)
}
