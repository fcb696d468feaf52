//! Tests for route analysis over the dice-move graph.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_ladders::{
    BoardTopology, Cell, PathAnalyzer, PathQueryResult, SearchMethod, Shortcut,
};

fn cell(n: u8) -> Cell {
    Cell::new(n).unwrap()
}

#[test]
fn test_ladder_reached_in_one_roll() {
    let board = BoardTopology::from_tables(&[(4, 14)], &[]).unwrap();
    let analyzer = PathAnalyzer::new(&board);

    let bfs = analyzer.bfs_tree();
    assert_eq!(bfs.method(), SearchMethod::BreadthFirst);
    assert_eq!(bfs.distance(cell(14)), Some(1));
    assert_eq!(bfs.predecessor(cell(14)), Some(Cell::START));

    let dijkstra = analyzer.dijkstra_tree();
    assert_eq!(dijkstra.distance(cell(14)), Some(1));
}

#[test]
fn test_classic_board_route() {
    let analyzer = PathAnalyzer::new(&BoardTopology::classic());
    let result = analyzer.compute_min_moves();

    assert_eq!(result.moves(), Some(7));
    let path = result.path().unwrap();
    assert_eq!(path.to_string(), "1->38->39->45->67->68->74->100");

    let weighted = analyzer.compute_shortest_weighted();
    assert_eq!(weighted.moves(), Some(7));
    let cells = weighted.path().unwrap().cells();
    assert_eq!(cells.first(), Some(&Cell::START));
    assert_eq!(cells.last(), Some(&Cell::GOAL));
}

#[test]
fn test_every_route_step_is_one_roll() {
    let board = BoardTopology::classic();
    let analyzer = PathAnalyzer::new(&board);

    for method in [SearchMethod::BreadthFirst, SearchMethod::Dijkstra] {
        let result = analyzer.compute(method);
        let cells = result.path().unwrap().cells();
        for pair in cells.windows(2) {
            assert!(
                analyzer.graph().successors(pair[0]).contains(&pair[1]),
                "{}: {} -> {} is not a single roll",
                method,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_methods_agree_on_distance() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut boards = vec![BoardTopology::empty(), BoardTopology::classic()];

    while boards.len() < 60 {
        let count = rng.random_range(1..=20);
        let shortcuts: Result<Vec<_>, _> = (0..count)
            .map(|_| Shortcut::from_pair(rng.random_range(2..=99), rng.random_range(1..=100)))
            .collect();
        if let Ok(board) = shortcuts.and_then(BoardTopology::new) {
            boards.push(board);
        }
    }

    for board in &boards {
        let analyzer = PathAnalyzer::new(board);
        let bfs = analyzer.compute_min_moves();
        let dijkstra = analyzer.compute_shortest_weighted();
        assert_eq!(bfs.moves(), dijkstra.moves());
        assert_eq!(bfs.is_reachable(), dijkstra.is_reachable());
        assert_eq!(
            analyzer.bfs_tree().distance(Cell::GOAL),
            analyzer.dijkstra_tree().distance(Cell::GOAL)
        );
    }
}

#[test]
fn test_unreachable_is_a_value() {
    let board =
        BoardTopology::from_tables(&[], &[(2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1)]).unwrap();
    let analyzer = PathAnalyzer::new(&board);

    assert_eq!(analyzer.compute_min_moves(), PathQueryResult::Unreachable);
    assert_eq!(analyzer.compute_shortest_weighted(), PathQueryResult::Unreachable);
    assert_eq!(analyzer.compute_min_moves().moves(), None);
    assert_eq!(analyzer.bfs_tree().predecessor(Cell::GOAL), None);
}

#[test]
fn test_queries_are_repeatable() {
    let analyzer = PathAnalyzer::new(&BoardTopology::classic());
    assert_eq!(analyzer.compute_min_moves(), analyzer.compute_min_moves());
    assert_eq!(
        analyzer.compute_shortest_weighted(),
        analyzer.compute_shortest_weighted()
    );
}
