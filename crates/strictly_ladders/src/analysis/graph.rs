//! The dice-move graph induced by a board.

use super::super::cell::{CELL_COUNT, Cell};
use super::super::dice::DIE_FACES;
use super::super::topology::BoardTopology;

/// Directed graph over cells 1..=100.
///
/// For every cell `u` and face `d` with `u + d <= 100` there is an edge
/// `u -> resolve(u + d)` of weight one roll. A shortcut hop never adds cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGraph {
    /// Successors per cell, indexed by cell number, in face order.
    successors: Vec<Vec<Cell>>,
}

impl MoveGraph {
    /// Builds the graph for a board.
    pub fn new(topology: &BoardTopology) -> Self {
        let mut successors = vec![Vec::new(); CELL_COUNT as usize + 1];
        for cell in Cell::all() {
            successors[cell.index()] = (1..=DIE_FACES)
                .filter_map(|face| cell.step(face))
                .map(|landed| topology.resolve(landed))
                .collect();
        }
        Self { successors }
    }

    /// Cells reachable from `cell` in one roll, in face order.
    ///
    /// May contain repeats when two faces resolve to the same cell.
    pub fn successors(&self, cell: Cell) -> &[Cell] {
        &self.successors[cell.index()]
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(n: u8) -> Cell {
        Cell::new(n).unwrap()
    }

    #[test]
    fn test_plain_board_edges() {
        let graph = MoveGraph::new(&BoardTopology::empty());
        assert_eq!(
            graph.successors(cell(1)),
            &[cell(2), cell(3), cell(4), cell(5), cell(6), cell(7)]
        );
        assert_eq!(graph.successors(cell(97)), &[cell(98), cell(99), cell(100)]);
        assert!(graph.successors(Cell::GOAL).is_empty());
        // 94 cells with six edges, then 5 + 4 + 3 + 2 + 1.
        assert_eq!(graph.edge_count(), 94 * 6 + 15);
    }

    #[test]
    fn test_shortcut_redirects_edge() {
        let board = BoardTopology::from_tables(&[(4, 14)], &[]).unwrap();
        let graph = MoveGraph::new(&board);
        assert_eq!(graph.successors(cell(1))[2], cell(14));
        assert!(!graph.successors(cell(1)).contains(&cell(4)));
    }
}
