//! End-to-end quest scenarios through the harness runner.

use lock_tests::quest_fixtures::{path_cost, CORRIDOR, NO_MEDALS, TWO_BY_TWO, WALLED_OFF};
use quest_harness::{solve, QuestConfig};
use quest_search::{Direction, HeuristicKind, Position, StepCosts, TerminationReason};

fn config(heuristic: HeuristicKind) -> QuestConfig {
    QuestConfig {
        heuristic,
        ..QuestConfig::default()
    }
}

#[test]
fn two_by_two_grid_costs_two_under_every_heuristic() {
    for heuristic in HeuristicKind::ALL {
        let report = solve(TWO_BY_TWO, &config(heuristic)).unwrap();
        let actions = report.actions.unwrap();
        assert_eq!(actions.len(), 2, "{heuristic}");
        assert_eq!(report.total_cost, Some(2), "{heuristic}");

        let mut sorted = actions.clone();
        sorted.sort();
        assert_eq!(sorted, vec![Direction::South, Direction::East]);
    }
}

#[test]
fn no_medals_returns_empty_solution() {
    for heuristic in HeuristicKind::ALL {
        let report = solve(NO_MEDALS, &config(heuristic)).unwrap();
        assert_eq!(report.actions, Some(vec![]));
        assert_eq!(report.total_cost, Some(0));
        assert_eq!(report.stats.expansions, 0);
    }
}

#[test]
fn unreachable_medal_returns_no_solution() {
    for heuristic in HeuristicKind::ALL {
        let report = solve(WALLED_OFF, &config(heuristic)).unwrap();
        assert_eq!(report.termination, TerminationReason::FrontierExhausted);
        assert_eq!(report.actions, None);
        // Every reachable cell is closed exactly once before giving up.
        assert_eq!(report.stats.expansions, 3);
        assert_eq!(report.stats.closed, 3);
    }
}

#[test]
fn corridor_walks_straight_east() {
    let costs = StepCosts {
        east: 4,
        ..StepCosts::default()
    };
    let report = solve(
        CORRIDOR,
        &QuestConfig {
            step_costs: costs,
            ..QuestConfig::default()
        },
    )
    .unwrap();
    let actions = report.actions.unwrap();
    assert_eq!(actions, vec![Direction::East; 6]);
    assert_eq!(report.total_cost, Some(path_cost(&actions, &costs)));
    assert_eq!(report.path.unwrap().last(), Some(&Position::new(6, 0)));
}

#[test]
fn informed_heuristics_never_expand_more_than_null() {
    let null = solve(CORRIDOR, &config(HeuristicKind::Null)).unwrap();
    for heuristic in [HeuristicKind::Single, HeuristicKind::Better, HeuristicKind::Gen] {
        let informed = solve(CORRIDOR, &config(heuristic)).unwrap();
        assert!(
            informed.stats.expansions <= null.stats.expansions,
            "{heuristic}: {} > {}",
            informed.stats.expansions,
            null.stats.expansions
        );
    }
}
