//! Final standings and the recorder seam.

use super::cell::Cell;
use super::error::RecordError;
use super::state::PlayerId;
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player's final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Display, Serialize, Deserialize)]
#[display("{player}: {position}")]
pub struct Standing {
    /// The player.
    player: PlayerId,
    /// Cell the player finished on.
    position: Cell,
}

impl Standing {
    /// Creates a standing.
    pub fn new(player: PlayerId, position: Cell) -> Self {
        Self { player, position }
    }
}

/// Persists final standings once a race ends.
///
/// The storage medium is up to the implementation.
pub trait ResultRecorder {
    /// Records standings in player-id order.
    fn record(&mut self, standings: &[Standing]) -> Result<(), RecordError>;
}

/// Keeps recorded standings in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    records: Vec<Vec<Standing>>,
}

impl MemoryRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every batch of standings recorded so far.
    pub fn records(&self) -> &[Vec<Standing>] {
        &self.records
    }
}

impl ResultRecorder for MemoryRecorder {
    #[instrument(skip(self, standings), fields(players = standings.len()))]
    fn record(&mut self, standings: &[Standing]) -> Result<(), RecordError> {
        debug!("Recording standings in memory");
        self.records.push(standings.to_vec());
        Ok(())
    }
}
