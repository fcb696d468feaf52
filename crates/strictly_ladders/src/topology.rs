//! Board topology: the shortcut table and single-hop resolution.

use super::cell::{CELL_COUNT, Cell};
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, instrument, warn};

/// Ladders of the classic board as `(source, destination)` pairs.
pub const CLASSIC_LADDERS: &[(u32, u32)] = &[
    (3, 38),
    (6, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Snakes of the classic board as `(source, destination)` pairs.
pub const CLASSIC_SNAKES: &[(u32, u32)] = &[
    (16, 4),
    (47, 26),
    (49, 11),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Direction of a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShortcutKind {
    /// Moves the player forward.
    Ladder,
    /// Moves the player backward.
    Snake,
}

/// A single-hop redirect from one cell to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    origin: Cell,
    destination: Cell,
}

impl Shortcut {
    /// Creates a shortcut.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SelfLoop` if both ends are the same cell and
    /// `ConfigError::GoalAsSource` if it starts on the goal.
    #[instrument]
    pub fn new(origin: Cell, destination: Cell) -> Result<Self, ConfigError> {
        if origin == destination {
            return Err(ConfigError::SelfLoop(origin));
        }
        if origin.is_goal() {
            return Err(ConfigError::GoalAsSource);
        }
        Ok(Self {
            origin,
            destination,
        })
    }

    /// Creates a shortcut from raw cell numbers.
    #[instrument]
    pub fn from_pair(origin: u32, destination: u32) -> Result<Self, ConfigError> {
        Self::new(Cell::try_from(origin)?, Cell::try_from(destination)?)
    }

    /// Cell that triggers the shortcut.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Cell the player is moved to.
    pub fn destination(&self) -> Cell {
        self.destination
    }

    /// Ladder if the shortcut moves forward, snake otherwise.
    pub fn kind(&self) -> ShortcutKind {
        if self.destination > self.origin {
            ShortcutKind::Ladder
        } else {
            ShortcutKind::Snake
        }
    }
}

/// The validated shortcut table of a board.
///
/// Invariants, checked at construction:
/// - no cell starts more than one shortcut
/// - the goal never starts a shortcut
/// - no shortcut ends on the source of another (resolution is single-hop)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTopology {
    /// Destination per source cell, indexed by cell number.
    jumps: [Option<Cell>; CELL_COUNT as usize + 1],
}

impl BoardTopology {
    /// Creates a board with no shortcuts.
    pub fn empty() -> Self {
        Self {
            jumps: [None; CELL_COUNT as usize + 1],
        }
    }

    /// Creates the classic board.
    pub fn classic() -> Self {
        Self::from_tables(CLASSIC_LADDERS, CLASSIC_SNAKES)
            .expect("classic board is a valid configuration")
    }

    /// Builds a topology from untagged shortcuts.
    ///
    /// Each shortcut is a ladder or a snake by comparing its ends.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any board invariant is violated.
    #[instrument(skip(shortcuts))]
    pub fn new(shortcuts: impl IntoIterator<Item = Shortcut>) -> Result<Self, ConfigError> {
        let mut topology = Self::empty();

        for shortcut in shortcuts {
            let slot = &mut topology.jumps[shortcut.origin.index()];
            if let Some(existing) = *slot {
                let existing = Shortcut {
                    origin: shortcut.origin,
                    destination: existing,
                };
                warn!(origin = %shortcut.origin, "Cell configured as source twice");
                return Err(if existing.kind() == shortcut.kind() {
                    ConfigError::DuplicateSource(shortcut.origin)
                } else {
                    ConfigError::ConflictingSource(shortcut.origin)
                });
            }
            *slot = Some(shortcut.destination);
        }

        if let Some(chained) = topology
            .shortcuts()
            .find(|s| topology.jumps[s.destination.index()].is_some())
        {
            warn!(
                origin = %chained.origin,
                via = %chained.destination,
                "Chained shortcut rejected"
            );
            return Err(ConfigError::ChainedShortcut {
                origin: chained.origin,
                via: chained.destination,
            });
        }

        debug!(shortcuts = topology.shortcuts().count(), "Board topology built");
        Ok(topology)
    }

    /// Builds a topology from separate ladder and snake tables.
    ///
    /// # Errors
    ///
    /// In addition to the checks of [`BoardTopology::new`], returns
    /// `ConfigError::MisTagged` when a pair does not move in the direction
    /// of the table it is listed in.
    #[instrument]
    pub fn from_tables(
        ladders: &[(u32, u32)],
        snakes: &[(u32, u32)],
    ) -> Result<Self, ConfigError> {
        let tagged = ladders
            .iter()
            .map(|&pair| (pair, ShortcutKind::Ladder))
            .chain(snakes.iter().map(|&pair| (pair, ShortcutKind::Snake)));

        let mut shortcuts = Vec::with_capacity(ladders.len() + snakes.len());
        for ((origin, destination), kind) in tagged {
            let shortcut = Shortcut::from_pair(origin, destination)?;
            if shortcut.kind() != kind {
                return Err(ConfigError::MisTagged {
                    origin: shortcut.origin,
                    destination: shortcut.destination,
                    kind,
                });
            }
            shortcuts.push(shortcut);
        }

        Self::new(shortcuts)
    }

    /// Applies at most one shortcut hop.
    ///
    /// Returns the destination if `cell` starts a shortcut, otherwise `cell`.
    pub fn resolve(&self, cell: Cell) -> Cell {
        self.jumps[cell.index()].unwrap_or(cell)
    }

    /// Returns the shortcut starting at `cell`, if any.
    pub fn shortcut_at(&self, cell: Cell) -> Option<Shortcut> {
        self.jumps[cell.index()].map(|destination| Shortcut {
            origin: cell,
            destination,
        })
    }

    /// Iterates all shortcuts in ascending source order.
    pub fn shortcuts(&self) -> impl Iterator<Item = Shortcut> + '_ {
        Cell::all().filter_map(|cell| self.shortcut_at(cell))
    }

    /// Iterates the ladders.
    pub fn ladders(&self) -> impl Iterator<Item = Shortcut> + '_ {
        self.shortcuts()
            .filter(|s| s.kind() == ShortcutKind::Ladder)
    }

    /// Iterates the snakes.
    pub fn snakes(&self) -> impl Iterator<Item = Shortcut> + '_ {
        self.shortcuts().filter(|s| s.kind() == ShortcutKind::Snake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(n: u8) -> Cell {
        Cell::new(n).unwrap()
    }

    #[test]
    fn test_classic_board_counts() {
        let board = BoardTopology::classic();
        assert_eq!(board.ladders().count(), 9);
        assert_eq!(board.snakes().count(), 9);
    }

    #[test]
    fn test_resolve_single_hop() {
        let board = BoardTopology::classic();
        assert_eq!(board.resolve(cell(3)), cell(38));
        assert_eq!(board.resolve(cell(98)), cell(78));
        assert_eq!(board.resolve(cell(80)), Cell::GOAL);
        assert_eq!(board.resolve(cell(2)), cell(2));
    }

    #[test]
    fn test_every_source_moves_within_board() {
        let board = BoardTopology::classic();
        for shortcut in board.shortcuts() {
            let resolved = board.resolve(shortcut.origin());
            assert_ne!(resolved, shortcut.origin());
            assert_eq!(resolved, shortcut.destination());
        }
    }

    #[test]
    fn test_self_loop_rejected() {
        assert_eq!(
            Shortcut::from_pair(10, 10),
            Err(ConfigError::SelfLoop(cell(10)))
        );
    }

    #[test]
    fn test_goal_source_rejected() {
        assert_eq!(
            Shortcut::from_pair(100, 50),
            Err(ConfigError::GoalAsSource)
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            BoardTopology::from_tables(&[(5, 101)], &[]),
            Err(ConfigError::OutOfRange(101))
        );
        assert_eq!(
            BoardTopology::from_tables(&[], &[(0, 1)]),
            Err(ConfigError::OutOfRange(0))
        );
    }

    #[test]
    fn test_conflicting_source_rejected() {
        assert_eq!(
            BoardTopology::from_tables(&[(20, 40)], &[(20, 5)]),
            Err(ConfigError::ConflictingSource(cell(20)))
        );
    }

    #[test]
    fn test_duplicate_source_rejected() {
        assert_eq!(
            BoardTopology::from_tables(&[(20, 40), (20, 50)], &[]),
            Err(ConfigError::DuplicateSource(cell(20)))
        );
    }

    #[test]
    fn test_chain_rejected() {
        assert_eq!(
            BoardTopology::from_tables(&[(4, 14), (14, 30)], &[]),
            Err(ConfigError::ChainedShortcut {
                origin: cell(4),
                via: cell(14),
            })
        );
    }

    #[test]
    fn test_mis_tagged_rejected() {
        assert_eq!(
            BoardTopology::from_tables(&[(40, 2)], &[]),
            Err(ConfigError::MisTagged {
                origin: cell(40),
                destination: cell(2),
                kind: ShortcutKind::Ladder,
            })
        );
    }

    #[test]
    fn test_untagged_constructor_infers_kind() {
        let board = BoardTopology::new([
            Shortcut::from_pair(4, 14).unwrap(),
            Shortcut::from_pair(50, 12).unwrap(),
        ])
        .unwrap();
        assert_eq!(board.shortcut_at(cell(4)).map(|s| s.kind()), Some(ShortcutKind::Ladder));
        assert_eq!(board.shortcut_at(cell(50)).map(|s| s.kind()), Some(ShortcutKind::Snake));
        assert_eq!(board.shortcut_at(cell(5)), None);
    }
}
