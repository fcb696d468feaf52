//! Race state: player positions, turn queue, and phase.

use super::cell::Cell;
use super::error::SetupError;
use super::invariants::{InvariantSet, RaceInvariants};
use super::standings::Standing;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::{instrument, warn};

/// Fewest players in a race.
pub const MIN_PLAYERS: usize = 2;

/// Most players in a race.
pub const MAX_PLAYERS: usize = 4;

/// Zero-based player identity. Displayed one-based ("Player 1").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Creates a player id from a zero-based index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index of the player.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Lifecycle of a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Turns may be taken.
    Active,
    /// A player reached the goal. Absorbing.
    Terminal {
        /// The player who reached the goal.
        winner: PlayerId,
    },
}

/// Complete race state.
///
/// Created with every player on the start cell and queued in id order.
/// Only `TurnEngine::advance` mutates it, and never after it turns terminal.
/// Deserialized states must satisfy every race invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Position per player, indexed by player id.
    positions: Vec<Cell>,
    /// Players still racing, front moves next.
    queue: VecDeque<PlayerId>,
    phase: Phase,
}

impl GameState {
    /// Creates a race for `player_count` players.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::PlayerCount` unless `2 <= player_count <= 4`.
    #[instrument]
    pub fn new(player_count: usize) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(SetupError::PlayerCount(player_count));
        }
        Ok(Self {
            positions: vec![Cell::START; player_count],
            queue: (0..player_count).map(PlayerId::new).collect(),
            phase: Phase::Active,
        })
    }

    /// Number of players in the race.
    pub fn player_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterates every player id in id order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.positions.len()).map(PlayerId::new)
    }

    /// Positions indexed by player id.
    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    /// Position of one player, or `None` for an unknown id.
    pub fn position(&self, player: PlayerId) -> Option<Cell> {
        self.positions.get(player.index()).copied()
    }

    /// Player whose turn is next, or `None` once the race is over.
    pub fn to_move(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Active => self.queue.front().copied(),
            Phase::Terminal { .. } => None,
        }
    }

    /// Players still racing, in turn order.
    pub fn turn_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.queue.iter().copied()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the race is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Terminal { .. })
    }

    /// Winner of the race, once terminal.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Active => None,
            Phase::Terminal { winner } => Some(winner),
        }
    }

    /// Final `(player, position)` pairs in player-id order.
    pub fn standings(&self) -> Vec<Standing> {
        self.players()
            .zip(self.positions.iter().copied())
            .map(|(player, position)| Standing::new(player, position))
            .collect()
    }

    /// Read-only copy for renderers and other collaborators.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            positions: self.positions.clone(),
            to_move: self.to_move(),
            terminal: self.is_terminal(),
            winner: self.winner(),
        }
    }

    pub(crate) fn pop_next(&mut self) -> Option<PlayerId> {
        self.queue.pop_front()
    }

    pub(crate) fn requeue(&mut self, player: PlayerId) {
        self.queue.push_back(player);
    }

    pub(crate) fn move_to(&mut self, player: PlayerId, cell: Cell) {
        self.positions[player.index()] = cell;
    }

    pub(crate) fn finish(&mut self, winner: PlayerId) {
        self.phase = Phase::Terminal { winner };
    }

    #[cfg(test)]
    pub(crate) fn queue_mut(&mut self) -> &mut VecDeque<PlayerId> {
        &mut self.queue
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    positions: Vec<Cell>,
    queue: VecDeque<PlayerId>,
    phase: Phase,
}

impl TryFrom<RawGameState> for GameState {
    type Error = SetupError;

    #[instrument(skip(raw), fields(players = raw.positions.len()))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let player_count = raw.positions.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(SetupError::PlayerCount(player_count));
        }

        let state = Self {
            positions: raw.positions,
            queue: raw.queue,
            phase: raw.phase,
        };
        RaceInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected restored race state");
            SetupError::Inconsistent(descriptions)
        })?;
        Ok(state)
    }
}

/// Per-frame view of a race for external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Position per player, indexed by player id.
    positions: Vec<Cell>,
    /// Player whose turn is next.
    to_move: Option<PlayerId>,
    /// Whether the race is over.
    terminal: bool,
    /// Winner, once terminal.
    winner: Option<PlayerId>,
}
