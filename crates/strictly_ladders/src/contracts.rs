//! Contract-based validation for turns.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} advance {Q}

use super::error::AdvanceError;
use super::invariants::{InvariantSet, RaceInvariants};
use super::state::{GameState, Phase};
use super::turn::TurnResult;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
///
/// - Precondition: {P(state)} - must hold before the transition
/// - Postcondition: {Q(before, after, action)} - must hold after it
pub trait Contract<S, A> {
    /// Checks preconditions before the transition.
    fn pre(state: &S) -> Result<(), AdvanceError>;

    /// Checks postconditions after the transition produced `action`.
    fn post(before: &S, after: &S, action: &A) -> Result<(), AdvanceError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the race must still be active.
pub struct RaceIsActive;

impl RaceIsActive {
    /// Fails with `IllegalAdvance` once the race is terminal.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), AdvanceError> {
        match state.phase() {
            Phase::Active => Ok(()),
            Phase::Terminal { winner } => {
                warn!(%winner, "Advance requested after the race ended");
                Err(AdvanceError::IllegalAdvance { winner })
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: only the mover's position changed, and it matches the result.
pub struct SingleMover;

impl SingleMover {
    /// Checks that every other player kept their cell.
    #[instrument(skip(before, after))]
    pub fn check(
        before: &GameState,
        after: &GameState,
        turn: &TurnResult,
    ) -> Result<(), AdvanceError> {
        let mover = turn.player();
        if after.position(mover) != Some(turn.destination()) {
            return Err(AdvanceError::InvariantViolation(format!(
                "{} is not on {}",
                mover,
                turn.destination()
            )));
        }

        let others_unchanged = before
            .players()
            .filter(|&player| player != mover)
            .all(|player| before.position(player) == after.position(player));
        if others_unchanged {
            Ok(())
        } else {
            Err(AdvanceError::InvariantViolation(
                "A player other than the mover changed position".to_string(),
            ))
        }
    }
}

/// Postcondition: the queue rotated by one, dropping the mover if they won.
pub struct QueueRotated;

impl QueueRotated {
    /// Compares the queue after the turn with the rotated queue from before.
    #[instrument(skip(before, after))]
    pub fn check(
        before: &GameState,
        after: &GameState,
        turn: &TurnResult,
    ) -> Result<(), AdvanceError> {
        let mut expected: Vec<_> = before.turn_order().skip(1).collect();
        if !turn.game_ended() {
            expected.push(turn.player());
        }

        if after.turn_order().eq(expected.iter().copied()) {
            Ok(())
        } else {
            Err(AdvanceError::InvariantViolation(
                "Turn queue did not rotate by exactly one player".to_string(),
            ))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `TurnEngine::advance`.
///
/// Preconditions:
/// - Race is active
///
/// Postconditions:
/// - Only the mover's position changed
/// - Queue rotated by one (mover removed on a win)
/// - All race invariants hold
pub struct TurnContract;

impl Contract<GameState, TurnResult> for TurnContract {
    fn pre(state: &GameState) -> Result<(), AdvanceError> {
        RaceIsActive::check(state)
    }

    fn post(
        before: &GameState,
        after: &GameState,
        turn: &TurnResult,
    ) -> Result<(), AdvanceError> {
        SingleMover::check(before, after, turn)?;
        QueueRotated::check(before, after, turn)?;
        RaceInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Turn postcondition failed");
            AdvanceError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardTopology, Cell, PlayerId, ScriptedDice, TurnEngine};
    use std::sync::Arc;

    fn engine(faces: &[u8]) -> TurnEngine<ScriptedDice> {
        TurnEngine::new(
            Arc::new(BoardTopology::classic()),
            ScriptedDice::new(faces.iter().copied()).unwrap(),
        )
    }

    #[test]
    fn test_precondition_active_race() {
        let state = GameState::new(2).unwrap();
        assert!(TurnContract::pre(&state).is_ok());
    }

    #[test]
    fn test_precondition_terminal_race() {
        let mut state = GameState::new(2).unwrap();
        state.pop_next();
        state.move_to(PlayerId::new(0), Cell::GOAL);
        state.finish(PlayerId::new(0));
        assert_eq!(
            TurnContract::pre(&state),
            Err(AdvanceError::IllegalAdvance {
                winner: PlayerId::new(0)
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_turn() {
        let before = GameState::new(3).unwrap();
        let mut after = before.clone();
        let turn = engine(&[2]).advance(&mut after).unwrap();
        assert!(TurnContract::post(&before, &after, &turn).is_ok());
    }

    #[test]
    fn test_postcondition_detects_bystander_move() {
        let before = GameState::new(2).unwrap();
        let mut after = before.clone();
        let turn = engine(&[2]).advance(&mut after).unwrap();

        after.move_to(PlayerId::new(1), Cell::new(5).unwrap());
        assert!(matches!(
            TurnContract::post(&before, &after, &turn),
            Err(AdvanceError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_stalled_queue() {
        let before = GameState::new(2).unwrap();
        let mut after = before.clone();
        let turn = engine(&[2]).advance(&mut after).unwrap();

        after.queue_mut().rotate_right(1);
        assert!(TurnContract::post(&before, &after, &turn).is_err());
    }
}
