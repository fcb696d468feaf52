//! Queue membership invariant: every player still racing is queued once.

use super::super::GameState;
use super::Invariant;
use tracing::warn;

/// Invariant: the turn queue holds exactly the players who have not won,
/// each exactly once.
pub struct QueueMembershipInvariant;

impl Invariant<GameState> for QueueMembershipInvariant {
    fn holds(state: &GameState) -> bool {
        let mut seen = vec![0usize; state.player_count()];
        for player in state.turn_order() {
            match seen.get_mut(player.index()) {
                Some(count) => *count += 1,
                None => {
                    warn!(%player, "Queued player is not in the race");
                    return false;
                }
            }
        }

        let winner = state.winner();
        let valid = state.players().all(|player| {
            let expected = if Some(player) == winner { 0 } else { 1 };
            seen[player.index()] == expected
        });

        if !valid {
            warn!(?seen, ?winner, "Turn queue membership violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Turn queue holds each non-winning player exactly once"
    }
}
