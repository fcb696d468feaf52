//! Roster invariant: the race seats two to four players.

use super::super::state::{MAX_PLAYERS, MIN_PLAYERS};
use super::super::GameState;
use super::Invariant;

/// Invariant: the number of players stays within `2..=4`.
pub struct RosterInvariant;

impl Invariant<GameState> for RosterInvariant {
    fn holds(state: &GameState) -> bool {
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&state.player_count())
    }

    fn description() -> &'static str {
        "Race seats between 2 and 4 players"
    }
}
