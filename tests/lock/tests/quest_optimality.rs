//! A* cost equals an exhaustive Dijkstra oracle for every heuristic.

use lock_tests::quest_fixtures::{oracle_cost, path_cost, render_grid, ALL, COST_TABLES};
use proptest::prelude::*;
use quest_harness::{solve, Grid, QuestConfig};
use quest_search::{HeuristicKind, StepCosts};

fn check(text: &str, costs: StepCosts) {
    let grid = Grid::parse(text).unwrap();
    let expected = oracle_cost(&grid, &costs);
    for heuristic in HeuristicKind::ALL {
        let config = QuestConfig {
            step_costs: costs,
            heuristic,
            ..QuestConfig::default()
        };
        let report = solve(text, &config).unwrap();
        assert_eq!(report.total_cost, expected, "{heuristic} on\n{text}{costs:?}");
        if let Some(actions) = &report.actions {
            assert_eq!(Some(path_cost(actions, &costs)), expected);
        }
        // Graph search: each closed state was expanded exactly once.
        assert_eq!(report.stats.closed as u64, report.stats.expansions);
    }
}

#[test]
fn named_grids_match_oracle() {
    for &(_, text) in ALL {
        for &costs in COST_TABLES {
            check(text, costs);
        }
    }
}

fn arb_grid() -> impl Strategy<Value = String> {
    (2_usize..=5, 2_usize..=4).prop_flat_map(|(w, h)| {
        let n = w * h;
        (
            proptest::collection::vec(proptest::bool::weighted(0.25), n),
            0..n,
            proptest::collection::btree_set(0..n, 0..=3),
        )
            .prop_map(move |(walls, start, medals)| {
                let medals: Vec<usize> = medals.into_iter().filter(|&m| m != start).collect();
                render_grid(w, h, &walls, start, &medals)
            })
    })
}

fn arb_costs() -> impl Strategy<Value = StepCosts> {
    (1_i64..=5, 1_i64..=5, 1_i64..=5, 1_i64..=5).prop_map(|(north, south, east, west)| StepCosts {
        north,
        south,
        east,
        west,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_grids_match_oracle(text in arb_grid(), costs in arb_costs()) {
        check(&text, costs);
    }
}
