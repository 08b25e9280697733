//! Shared helpers for quest benchmark suites.
//!
//! Grids are generated deterministically so runs are comparable.

use quest_harness::{Grid, QuestProblem};
use quest_search::StepCosts;

/// A named benchmark grid.
pub struct Scenario {
    pub name: &'static str,
    pub text: String,
}

/// Obstacle-free `width x height` field, start in the middle, medals in the
/// given cells.
#[must_use]
pub fn open_field(width: usize, height: usize, medals: &[(usize, usize)]) -> String {
    let mut rows = vec![vec!['-'; width]; height];
    rows[height / 2][width / 2] = 'S';
    for &(col, row) in medals {
        rows[row][col] = 'M';
    }
    join(&rows)
}

/// Horizontal walls on every odd row, with the gap alternating between the
/// east and west edge. Start top-left, one medal bottom-right, one
/// top-right.
#[must_use]
pub fn serpentine(width: usize, height: usize) -> String {
    let mut rows = vec![vec!['-'; width]; height];
    for (i, row) in rows.iter_mut().enumerate().filter(|(i, _)| i % 2 == 1) {
        row.fill('W');
        let gap = if (i / 2) % 2 == 0 { width - 1 } else { 0 };
        row[gap] = '-';
    }
    rows[0][0] = 'S';
    rows[0][width - 1] = 'M';
    rows[height - 1][width - 1] = 'M';
    join(&rows)
}

fn join(rows: &[Vec<char>]) -> String {
    rows.iter()
        .map(|r| r.iter().collect::<String>() + "\n")
        .collect()
}

/// The grids used by the macro suite.
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "open_16x16_corners",
            text: open_field(16, 16, &[(0, 0), (15, 0), (0, 15), (15, 15)]),
        },
        Scenario {
            name: "open_10x10_scatter",
            text: open_field(10, 10, &[(1, 2), (8, 1), (3, 7), (9, 9), (5, 0), (0, 6)]),
        },
        Scenario {
            name: "serpentine_21x15",
            text: serpentine(21, 15),
        },
    ]
}

/// Parse `text` into a problem.
///
/// # Panics
///
/// Panics if `text` is not a valid grid; benchmark inputs are generated.
#[must_use]
pub fn quest_problem(text: &str, costs: StepCosts) -> QuestProblem {
    let grid = Grid::parse(text).expect("benchmark grid parses");
    QuestProblem::new(grid, costs)
}
