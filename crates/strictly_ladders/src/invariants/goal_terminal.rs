//! Goal/terminal invariant: the race ends exactly when someone stands on 100.

use super::super::{Cell, GameState, Phase};
use super::Invariant;

/// Invariant: the race is terminal if and only if a player stands on the
/// goal, and that player is the recorded winner.
pub struct GoalTerminalInvariant;

impl Invariant<GameState> for GoalTerminalInvariant {
    fn holds(state: &GameState) -> bool {
        let mut on_goal = state
            .players()
            .filter(|&player| state.position(player) == Some(Cell::GOAL));

        match state.phase() {
            Phase::Active => on_goal.next().is_none(),
            Phase::Terminal { winner } => {
                on_goal.next() == Some(winner) && on_goal.next().is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Race is terminal exactly when the winner stands on the goal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn test_active_without_goal_holds() {
        let state = GameState::new(2).unwrap();
        assert!(GoalTerminalInvariant::holds(&state));
    }

    #[test]
    fn test_active_with_player_on_goal_violates() {
        let mut state = GameState::new(2).unwrap();
        state.move_to(PlayerId::new(1), Cell::GOAL);
        assert!(!GoalTerminalInvariant::holds(&state));
    }

    #[test]
    fn test_terminal_winner_off_goal_violates() {
        let mut state = GameState::new(2).unwrap();
        state.finish(PlayerId::new(1));
        assert!(!GoalTerminalInvariant::holds(&state));

        state.move_to(PlayerId::new(1), Cell::GOAL);
        assert!(GoalTerminalInvariant::holds(&state));
    }
}
