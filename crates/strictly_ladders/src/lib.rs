//! Strictly Ladders - pure snakes-and-ladders race logic
//!
//! A race of 2-4 players over 100 cells, where ladders carry a player
//! forward and snakes send them back. Landing exactly on cell 100 wins.
//!
//! # Architecture
//!
//! - **Topology**: validated shortcut table with single-hop resolution
//! - **Dice**: injectable die, seeded or scripted for replay
//! - **Turn engine**: round-robin turn queue, movement, win detection
//! - **Analysis**: fewest-rolls routes by breadth-first search and Dijkstra
//! - **Contracts**: turn pre/postconditions backed by state invariants
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_ladders::{BoardTopology, Race, RandomDice};
//!
//! let board = Arc::new(BoardTopology::classic());
//! let mut race = Race::new(board, 2, RandomDice::seeded(7)).unwrap();
//!
//! let best = race.query_min_moves_path();
//! assert!(best.is_reachable());
//!
//! while !race.state().is_terminal() {
//!     let turn = race.advance_turn().unwrap();
//!     println!("{}", turn);
//! }
//! assert!(race.state().winner().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cell;
mod contracts;
mod dice;
mod error;
pub mod invariants;
mod race;
mod standings;
mod state;
mod topology;
mod turn;

// Crate-level exports - Board
pub use cell::{CELL_COUNT, Cell};
pub use topology::{BoardTopology, CLASSIC_LADDERS, CLASSIC_SNAKES, Shortcut, ShortcutKind};

// Crate-level exports - Dice
pub use dice::{DIE_FACES, DiceSource, RandomDice, ScriptedDice};

// Crate-level exports - State and turns
pub use state::{GameSnapshot, GameState, MAX_PLAYERS, MIN_PLAYERS, Phase, PlayerId};
pub use turn::{TurnEngine, TurnOutcome, TurnPlan, TurnResult, plan_turn};

// Crate-level exports - Contracts
pub use contracts::{Contract, QueueRotated, RaceIsActive, SingleMover, TurnContract};

// Crate-level exports - Analysis
pub use analysis::{
    MoveGraph, OptimalPath, PathAnalyzer, PathQueryResult, SearchMethod, SearchTree,
    breadth_first, dijkstra,
};

// Crate-level exports - Standings
pub use standings::{MemoryRecorder, ResultRecorder, Standing};

// Crate-level exports - Session facade
pub use race::Race;

// Crate-level exports - Errors
pub use error::{AdvanceError, ConfigError, RecordError, SetupError};
