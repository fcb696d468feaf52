//! Route analysis: the fewest dice rolls from start to goal.
//!
//! The analyzer reads a [`BoardTopology`] only. It never touches race state,
//! so queries are safe at any time, including between turns.
//!
//! Both searches report the same minimal move count. The cells of the
//! reported route may differ between them where several predecessors share
//! a distance; neither choice is canonical.

mod graph;
mod search;

pub use graph::MoveGraph;
pub use search::{SearchTree, breadth_first, dijkstra};

use super::cell::Cell;
use super::topology::BoardTopology;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;
use tracing::{debug, instrument};

/// Search algorithm behind a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SearchMethod {
    /// Breadth-first search.
    #[strum(to_string = "BFS")]
    BreadthFirst,
    /// Dijkstra's algorithm with a priority queue.
    #[strum(to_string = "Dijkstra")]
    Dijkstra,
}

/// A route of cells from start to goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptimalPath {
    cells: Vec<Cell>,
}

impl OptimalPath {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cells visited, starting at 1.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of rolls along the route.
    pub fn moves(&self) -> u32 {
        self.cells.len().saturating_sub(1) as u32
    }
}

impl fmt::Display for OptimalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

/// Answer to a route query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathQueryResult {
    /// A shortest route exists.
    Reachable(OptimalPath),
    /// No sequence of rolls reaches the goal.
    Unreachable,
}

impl PathQueryResult {
    /// Minimal number of rolls, if reachable.
    pub fn moves(&self) -> Option<u32> {
        match self {
            PathQueryResult::Reachable(path) => Some(path.moves()),
            PathQueryResult::Unreachable => None,
        }
    }

    /// The route, if reachable.
    pub fn path(&self) -> Option<&OptimalPath> {
        match self {
            PathQueryResult::Reachable(path) => Some(path),
            PathQueryResult::Unreachable => None,
        }
    }

    /// Whether the goal can be reached.
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathQueryResult::Reachable(_))
    }
}

/// Computes optimal routes over a board.
#[derive(Debug, Clone)]
pub struct PathAnalyzer {
    graph: MoveGraph,
}

impl PathAnalyzer {
    /// Builds the move graph for `topology`.
    #[instrument(skip(topology))]
    pub fn new(topology: &BoardTopology) -> Self {
        let graph = MoveGraph::new(topology);
        debug!(edges = graph.edge_count(), "Move graph built");
        Self { graph }
    }

    /// The underlying move graph.
    pub fn graph(&self) -> &MoveGraph {
        &self.graph
    }

    /// Breadth-first search tree from the start.
    pub fn bfs_tree(&self) -> SearchTree {
        breadth_first(&self.graph)
    }

    /// Dijkstra search tree from the start.
    pub fn dijkstra_tree(&self) -> SearchTree {
        dijkstra(&self.graph)
    }

    /// Fewest-rolls route via breadth-first search.
    #[instrument(skip(self))]
    pub fn compute_min_moves(&self) -> PathQueryResult {
        let result = self.bfs_tree().route_to(Cell::GOAL);
        log_result(SearchMethod::BreadthFirst, &result);
        result
    }

    /// Fewest-rolls route via Dijkstra's algorithm.
    #[instrument(skip(self))]
    pub fn compute_shortest_weighted(&self) -> PathQueryResult {
        let result = self.dijkstra_tree().route_to(Cell::GOAL);
        log_result(SearchMethod::Dijkstra, &result);
        result
    }

    /// Runs the query for `method`.
    pub fn compute(&self, method: SearchMethod) -> PathQueryResult {
        match method {
            SearchMethod::BreadthFirst => self.compute_min_moves(),
            SearchMethod::Dijkstra => self.compute_shortest_weighted(),
        }
    }
}

fn log_result(method: SearchMethod, result: &PathQueryResult) {
    match result {
        PathQueryResult::Reachable(path) => {
            debug!(%method, moves = path.moves(), cells = path.cells().len(), "Route found");
        }
        PathQueryResult::Unreachable => debug!(%method, "Goal unreachable"),
    }
}
