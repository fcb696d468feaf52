//! Error types for board setup, turn advancement, and result recording.

use super::cell::Cell;
use super::state::PlayerId;
use super::topology::ShortcutKind;
use derive_more::{Display, Error};
use tracing::instrument;

/// Malformed board or dice configuration.
///
/// Fatal at construction: no partially built topology is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// A cell number lies outside `1..=100`.
    #[display("Cell {} is off the board (1-100)", _0)]
    OutOfRange(u32),

    /// A shortcut leads back to its own cell.
    #[display("Shortcut at {} leads to itself", _0)]
    SelfLoop(Cell),

    /// The goal cell was configured as a shortcut source.
    #[display("The goal cell cannot start a shortcut")]
    GoalAsSource,

    /// Two shortcuts of the same kind start at one cell.
    #[display("Cell {} starts more than one shortcut", _0)]
    DuplicateSource(Cell),

    /// One cell starts both a ladder and a snake.
    #[display("Cell {} starts both a ladder and a snake", _0)]
    ConflictingSource(Cell),

    /// A shortcut ends on the source of another shortcut.
    #[display("Shortcut from {origin} ends on {via}, which starts another shortcut")]
    ChainedShortcut {
        /// Source of the first shortcut.
        origin: Cell,
        /// Destination of the first shortcut, itself a source.
        via: Cell,
    },

    /// A pair listed under one kind points the other way.
    #[display("{origin}->{destination} is listed as a {kind} but does not move that way")]
    MisTagged {
        /// Source cell of the pair.
        origin: Cell,
        /// Destination cell of the pair.
        destination: Cell,
        /// Kind the pair was listed under.
        kind: ShortcutKind,
    },

    /// A scripted die face outside `1..=6`.
    #[display("Die face {} is not between 1 and 6", _0)]
    InvalidDieFace(u8),

    /// A scripted die with no faces.
    #[display("Scripted dice need at least one face")]
    EmptyScript,
}

impl std::error::Error for ConfigError {}

/// Invalid race setup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupError {
    /// Player count outside `2..=4`.
    #[display("A race needs 2 to 4 players, got {}", _0)]
    PlayerCount(usize),

    /// Restored state breaks a race invariant.
    #[display("Inconsistent race state: {}", _0)]
    Inconsistent(String),
}

impl std::error::Error for SetupError {}

/// Error returned by `TurnEngine::advance`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AdvanceError {
    /// The race is terminal; no further turns exist.
    #[display("Cannot advance: the race is over, {winner} won")]
    IllegalAdvance {
        /// The player who already won.
        winner: PlayerId,
    },

    /// The dice source produced a face outside `1..=6`.
    #[display("Dice source rolled {}, outside 1..=6", _0)]
    InvalidRoll(u8),

    /// A turn postcondition failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for AdvanceError {}

/// Failure to persist final standings.
#[derive(Debug, Clone, Display, Error)]
#[display("Record error: {} at {}:{}", message, file, line)]
pub struct RecordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RecordError {
    /// Creates a new record error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RecordError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
