//! Board configuration files.
//!
//! A board file lists ladders and snakes as `[source, destination]` pairs:
//!
//! ```toml
//! ladders = [[3, 38], [6, 14]]
//! snakes = [[16, 4], [47, 26]]
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ladders::{BoardTopology, CLASSIC_LADDERS, CLASSIC_SNAKES, ConfigError};
use tracing::{debug, info, instrument};

/// Shortcut tables read from a board file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Ladders as `(source, destination)`; each must move forward.
    #[serde(default)]
    ladders: Vec<(u32, u32)>,

    /// Snakes as `(source, destination)`; each must move backward.
    #[serde(default)]
    snakes: Vec<(u32, u32)>,
}

impl BoardConfig {
    /// The classic board.
    pub fn classic() -> Self {
        Self {
            ladders: CLASSIC_LADDERS.to_vec(),
            snakes: CLASSIC_SNAKES.to_vec(),
        }
    }

    /// Parses a board from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, BoardFileError> {
        toml::from_str(content)
            .map_err(|e| BoardFileError::new(format!("Failed to parse board: {}", e)))
    }

    /// Loads a board from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoardFileError> {
        debug!("Loading board from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BoardFileError::new(format!("Failed to read board file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            ladders = config.ladders.len(),
            snakes = config.snakes.len(),
            "Board loaded successfully"
        );
        Ok(config)
    }

    /// Validates the tables into a topology.
    pub fn to_topology(&self) -> Result<BoardTopology, ConfigError> {
        BoardTopology::from_tables(&self.ladders, &self.snakes)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Loads the board at `path`, or the classic board when `None`.
#[instrument]
pub fn load_topology(path: Option<&Path>) -> anyhow::Result<BoardTopology> {
    let config = match path {
        Some(path) => BoardConfig::from_file(path)?,
        None => BoardConfig::classic(),
    };
    Ok(config.to_topology()?)
}

/// Board file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Board file error: {} at {}:{}", message, file, line)]
pub struct BoardFileError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardFileError {
    /// Creates a new board file error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
