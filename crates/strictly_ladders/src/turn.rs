//! Turn engine: one dice roll per call, round-robin turn order, win detection.

use super::cell::Cell;
use super::contracts::{Contract, TurnContract};
use super::dice::{DIE_FACES, DiceSource};
use super::error::AdvanceError;
use super::state::{GameState, PlayerId};
use super::topology::{BoardTopology, ShortcutKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// What happens to the mover after a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The roll would pass the goal; the player stays put.
    Overshoot,
    /// The player moves and stays in the race.
    Continue,
    /// The player reaches the goal and wins.
    Finish,
}

/// Movement computed for one roll, before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnPlan {
    /// Raw landing square, `from + dice`; may exceed 100 on an overshoot.
    pub landed: u8,
    /// Final cell after at most one shortcut hop.
    pub destination: Cell,
    /// Shortcut applied on landing.
    pub shortcut: Option<ShortcutKind>,
    /// Effect on the mover.
    pub outcome: TurnOutcome,
}

/// Plans a roll of `dice` from `from`.
///
/// The branching is a flat table over where the roll lands and whether the
/// resolved cell is the goal:
///
/// | landing          | reaches goal | outcome   |
/// |------------------|--------------|-----------|
/// | past the goal    | -            | Overshoot |
/// | plain cell       | no           | Continue  |
/// | plain cell       | yes          | Finish    |
/// | shortcut source  | no           | Continue  |
/// | shortcut source  | yes          | Finish    |
pub fn plan_turn(topology: &BoardTopology, from: Cell, dice: u8) -> TurnPlan {
    let landed = from.get().saturating_add(dice);
    let hop = from
        .step(dice)
        .map(|cell| (cell, topology.shortcut_at(cell)));

    let (destination, shortcut) = match hop {
        None => (from, None),
        Some((cell, None)) => (cell, None),
        Some((_, Some(shortcut))) => (shortcut.destination(), Some(shortcut.kind())),
    };

    let outcome = match (hop.is_some(), destination.is_goal()) {
        (false, _) => TurnOutcome::Overshoot,
        (true, false) => TurnOutcome::Continue,
        (true, true) => TurnOutcome::Finish,
    };

    TurnPlan {
        landed,
        destination,
        shortcut,
        outcome,
    }
}

/// Outcome of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnResult {
    player: PlayerId,
    dice: u8,
    from: Cell,
    landed: u8,
    destination: Cell,
    shortcut: Option<ShortcutKind>,
    game_ended: bool,
}

impl TurnResult {
    /// Player who took the turn.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Value rolled.
    pub fn dice(&self) -> u8 {
        self.dice
    }

    /// Position before the roll.
    pub fn from(&self) -> Cell {
        self.from
    }

    /// Raw landing square before shortcut resolution; above 100 on an overshoot.
    pub fn landed(&self) -> u8 {
        self.landed
    }

    /// Position after the turn.
    pub fn destination(&self) -> Cell {
        self.destination
    }

    /// Shortcut applied, if any.
    pub fn shortcut(&self) -> Option<ShortcutKind> {
        self.shortcut
    }

    /// Whether this turn ended the race.
    pub fn game_ended(&self) -> bool {
        self.game_ended
    }

    /// Whether the roll passed the goal and forfeited movement.
    pub fn overshot(&self) -> bool {
        self.landed > Cell::GOAL.get()
    }
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rolled {} from {}", self.player, self.dice, self.from)?;
        if self.overshot() {
            return write!(f, " but must land exactly on {}", Cell::GOAL);
        }
        write!(f, " to {}", self.landed)?;
        match self.shortcut {
            Some(ShortcutKind::Snake) => write!(f, ", bitten to {}", self.destination)?,
            Some(ShortcutKind::Ladder) => write!(f, ", climbed to {}", self.destination)?,
            None => {}
        }
        if self.game_ended {
            write!(f, " and wins!")?;
        }
        Ok(())
    }
}

/// Drives turns over a shared board with an owned dice source.
///
/// The engine holds no race state of its own; every call takes the
/// `GameState` to mutate. Calls must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct TurnEngine<D> {
    topology: Arc<BoardTopology>,
    dice: D,
}

impl<D: DiceSource> TurnEngine<D> {
    /// Creates an engine over `topology` rolling with `dice`.
    pub fn new(topology: Arc<BoardTopology>, dice: D) -> Self {
        Self { topology, dice }
    }

    /// Plays one turn for the player at the front of the queue.
    ///
    /// Exactly one position and one queue rotation change per call. A
    /// winner leaves the queue for good and the race turns terminal.
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::IllegalAdvance` if the race is already over,
    /// and `AdvanceError::InvalidRoll` if the dice source breaks its range.
    /// The state is untouched on either error. In debug builds, returns
    /// `AdvanceError::InvariantViolation` if the turn broke a state invariant.
    #[instrument(skip(self, state), fields(to_move = ?state.to_move()))]
    pub fn advance(&mut self, state: &mut GameState) -> Result<TurnResult, AdvanceError> {
        TurnContract::pre(state)?;

        #[cfg(debug_assertions)]
        let before = state.clone();

        let player = state.to_move().ok_or_else(|| {
            AdvanceError::InvariantViolation("Active race with an empty turn queue".to_string())
        })?;
        let from = state
            .position(player)
            .ok_or_else(|| AdvanceError::InvariantViolation(format!("Unknown {}", player)))?;

        let dice = self.dice.roll();
        if !(1..=DIE_FACES).contains(&dice) {
            warn!(%player, dice, "Dice source rolled an impossible face");
            return Err(AdvanceError::InvalidRoll(dice));
        }
        state.pop_next();

        let plan = plan_turn(&self.topology, from, dice);
        match plan.outcome {
            TurnOutcome::Overshoot => {
                debug!(%player, dice, %from, landed = plan.landed, "Overshoot, position unchanged");
                state.requeue(player);
            }
            TurnOutcome::Continue => {
                state.move_to(player, plan.destination);
                state.requeue(player);
            }
            TurnOutcome::Finish => {
                state.move_to(player, plan.destination);
                state.finish(player);
                info!(%player, "Player reached the goal");
            }
        }

        let result = TurnResult {
            player,
            dice,
            from,
            landed: plan.landed,
            destination: plan.destination,
            shortcut: plan.shortcut,
            game_ended: plan.outcome == TurnOutcome::Finish,
        };

        info!(
            %player,
            dice,
            %from,
            landed = plan.landed,
            destination = %plan.destination,
            shortcut = ?plan.shortcut,
            "Turn played"
        );

        #[cfg(debug_assertions)]
        TurnContract::post(&before, state, &result)?;

        Ok(result)
    }
}
