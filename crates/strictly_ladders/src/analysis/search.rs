//! Breadth-first and Dijkstra searches over the move graph.

use super::super::cell::{CELL_COUNT, Cell};
use super::graph::MoveGraph;
use super::{OptimalPath, PathQueryResult, SearchMethod};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use tracing::{debug, instrument};

/// Per-cell distance and predecessor from one search.
///
/// Cells the search never reached, including any left unexplored after the
/// early stop at the goal, have neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    method: SearchMethod,
    distance: Vec<Option<u32>>,
    predecessor: Vec<Option<Cell>>,
}

impl SearchTree {
    fn rooted(method: SearchMethod) -> Self {
        let mut distance = vec![None; CELL_COUNT as usize + 1];
        distance[Cell::START.index()] = Some(0);
        Self {
            method,
            distance,
            predecessor: vec![None; CELL_COUNT as usize + 1],
        }
    }

    /// Search that produced this tree.
    pub fn method(&self) -> SearchMethod {
        self.method
    }

    /// Fewest rolls from the start to `cell`, if reached.
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.distance[cell.index()]
    }

    /// Cell from which `cell` was reached on a shortest route.
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        self.predecessor[cell.index()]
    }

    /// Walks predecessors back from `target` to the start.
    pub fn route_to(&self, target: Cell) -> PathQueryResult {
        let Some(moves) = self.distance(target) else {
            return PathQueryResult::Unreachable;
        };

        let mut cells = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            cells.push(previous);
            current = previous;
        }
        cells.reverse();

        if cells.first() != Some(&Cell::START) || cells.len() != moves as usize + 1 {
            return PathQueryResult::Unreachable;
        }
        PathQueryResult::Reachable(OptimalPath::new(cells))
    }
}

/// Breadth-first search from the start, stopping once the goal is dequeued.
///
/// Each cell keeps the predecessor that discovered it first.
#[instrument(skip(graph))]
pub fn breadth_first(graph: &MoveGraph) -> SearchTree {
    let mut tree = SearchTree::rooted(SearchMethod::BreadthFirst);
    let mut frontier = VecDeque::from([Cell::START]);
    let mut expanded = 0usize;

    while let Some(cell) = frontier.pop_front() {
        if cell.is_goal() {
            break;
        }
        expanded += 1;
        let next_distance = tree.distance[cell.index()].map_or(0, |d| d + 1);
        for &next in graph.successors(cell) {
            if tree.distance[next.index()].is_none() {
                tree.distance[next.index()] = Some(next_distance);
                tree.predecessor[next.index()] = Some(cell);
                frontier.push_back(next);
            }
        }
    }

    debug!(expanded, goal = ?tree.distance(Cell::GOAL), "Breadth-first search finished");
    tree
}

/// Dijkstra's algorithm with unit edge weights, stopping once the goal is popped.
///
/// Predecessors are replaced only on strict improvement.
#[instrument(skip(graph))]
pub fn dijkstra(graph: &MoveGraph) -> SearchTree {
    let mut tree = SearchTree::rooted(SearchMethod::Dijkstra);
    let mut heap = BinaryHeap::from([Reverse((0u32, Cell::START))]);
    let mut expanded = 0usize;

    while let Some(Reverse((distance, cell))) = heap.pop() {
        if cell.is_goal() {
            break;
        }
        if tree.distance[cell.index()].is_some_and(|best| distance > best) {
            continue;
        }
        expanded += 1;
        let candidate = distance + 1;
        for &next in graph.successors(cell) {
            let improves = tree.distance[next.index()].is_none_or(|best| candidate < best);
            if improves {
                tree.distance[next.index()] = Some(candidate);
                tree.predecessor[next.index()] = Some(cell);
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    debug!(expanded, goal = ?tree.distance(Cell::GOAL), "Dijkstra search finished");
    tree
}
