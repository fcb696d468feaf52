//! Dice sources.
//!
//! The turn engine draws every roll from a [`DiceSource`] it owns, so a race
//! can run on real randomness or replay a fixed script.

use super::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// A source of uniform die rolls in `1..=6`.
///
/// The turn engine rejects any other face with `AdvanceError::InvalidRoll`
/// in every build profile.
pub trait DiceSource {
    /// Rolls the die once. Must return a face in `1..=6`.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// A fair six-sided die backed by a seedable generator.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Creates a die seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a die with a fixed seed, for deterministic replay.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// A die that replays a fixed sequence of faces, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Creates a scripted die.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyScript` for an empty script and
    /// `ConfigError::InvalidDieFace` for any face outside `1..=6`.
    #[instrument(skip(faces))]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Result<Self, ConfigError> {
        let faces: Vec<u8> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        if let Some(&bad) = faces.iter().find(|&&f| !(1..=DIE_FACES).contains(&f)) {
            return Err(ConfigError::InvalidDieFace(bad));
        }
        Ok(Self { faces, cursor: 0 })
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.cursor];
        self.cursor = (self.cursor + 1) % self.faces.len();
        face
    }
}
