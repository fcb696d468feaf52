//! A race session: the board, its state, and its turn engine in one place.
//!
//! This is the surface a driver talks to. Each method maps to one command
//! an input layer issues (advance, query a route, read a snapshot, record
//! the standings).

use super::analysis::{PathAnalyzer, PathQueryResult};
use super::dice::DiceSource;
use super::error::{AdvanceError, RecordError, SetupError};
use super::standings::{ResultRecorder, Standing};
use super::state::{GameSnapshot, GameState};
use super::topology::BoardTopology;
use super::turn::{TurnEngine, TurnResult};
use std::sync::Arc;
use tracing::{info, instrument};

/// One race over a shared board.
#[derive(Debug, Clone)]
pub struct Race<D> {
    analyzer: PathAnalyzer,
    state: GameState,
    engine: TurnEngine<D>,
}

impl<D: DiceSource> Race<D> {
    /// Starts a race for `player_count` players.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::PlayerCount` unless `2 <= player_count <= 4`.
    #[instrument(skip(topology, dice))]
    pub fn new(
        topology: Arc<BoardTopology>,
        player_count: usize,
        dice: D,
    ) -> Result<Self, SetupError> {
        let state = GameState::new(player_count)?;
        let analyzer = PathAnalyzer::new(&topology);
        let engine = TurnEngine::new(topology, dice);
        info!(player_count, "Race started");
        Ok(Self {
            analyzer,
            state,
            engine,
        })
    }

    /// Current race state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only copy of the state for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Plays one turn.
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::IllegalAdvance` once the race is over.
    pub fn advance_turn(&mut self) -> Result<TurnResult, AdvanceError> {
        self.engine.advance(&mut self.state)
    }

    /// Fewest-rolls route by breadth-first search.
    pub fn query_min_moves_path(&self) -> PathQueryResult {
        self.analyzer.compute_min_moves()
    }

    /// Fewest-rolls route by Dijkstra's algorithm.
    pub fn query_shortest_weighted_path(&self) -> PathQueryResult {
        self.analyzer.compute_shortest_weighted()
    }

    /// Final positions in player-id order.
    pub fn standings(&self) -> Vec<Standing> {
        self.state.standings()
    }

    /// Hands the final standings to `recorder`.
    ///
    /// # Errors
    ///
    /// Fails if the race is still running or the recorder fails.
    #[instrument(skip(self, recorder))]
    pub fn record_standings(&self, recorder: &mut impl ResultRecorder) -> Result<(), RecordError> {
        let Some(winner) = self.state.winner() else {
            return Err(RecordError::new("Race is still in progress"));
        };
        info!(%winner, "Recording final standings");
        recorder.record(&self.state.standings())
    }
}
