//! Board cells.

use super::error::ConfigError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: u8 = 100;

/// A numbered square on the board.
///
/// A `Cell` is always within `1..=100`; cell 1 is the start and cell 100
/// is the goal. Out-of-range values cannot be represented.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// Starting cell for every player.
    pub const START: Cell = Cell(1);

    /// Goal cell. Reaching it exactly ends the race.
    pub const GOAL: Cell = Cell(CELL_COUNT);

    /// Creates a cell, or `None` if `value` is off the board.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= CELL_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the cell number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index of this cell in a table sized `CELL_COUNT + 1`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the goal cell.
    pub const fn is_goal(self) -> bool {
        self.0 == CELL_COUNT
    }

    /// Cell reached by moving `pips` squares forward, or `None` past the goal.
    pub fn step(self, pips: u8) -> Option<Self> {
        self.0.checked_add(pips).and_then(Self::new)
    }

    /// Iterates all cells from start to goal.
    pub fn all() -> impl Iterator<Item = Cell> {
        (1..=CELL_COUNT).map(Cell)
    }
}

impl TryFrom<u32> for Cell {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(ConfigError::OutOfRange(value))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Cell::new(0), None);
        assert_eq!(Cell::new(1), Some(Cell::START));
        assert_eq!(Cell::new(100), Some(Cell::GOAL));
        assert_eq!(Cell::new(101), None);
    }

    #[test]
    fn test_step_stops_at_goal() {
        let cell = Cell::new(94).unwrap();
        assert_eq!(cell.step(6), Some(Cell::GOAL));
        assert_eq!(Cell::new(98).unwrap().step(5), None);
    }

    #[test]
    fn test_try_from_rejects_large_values() {
        assert_eq!(Cell::try_from(300), Err(ConfigError::OutOfRange(300)));
        assert_eq!(Cell::try_from(0), Err(ConfigError::OutOfRange(0)));
        assert_eq!(Cell::try_from(42).map(Cell::get), Ok(42));
    }

    #[test]
    fn test_all_covers_board() {
        let cells: Vec<_> = Cell::all().collect();
        assert_eq!(cells.len(), 100);
        assert_eq!(cells.first(), Some(&Cell::START));
        assert_eq!(cells.last(), Some(&Cell::GOAL));
    }
}
