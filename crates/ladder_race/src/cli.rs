//! Command-line interface for ladder_race.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Ladder Race - headless snakes-and-ladders race
#[derive(Parser, Debug)]
#[command(name = "ladder_race")]
#[command(about = "Snakes-and-ladders race with optimal route analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a race to the end
    Play {
        /// Number of players (2-4)
        #[arg(short, long, default_value = "2")]
        players: usize,

        /// Seed for the die; seeded from the OS when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Board file (TOML); the classic board when omitted
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// File the final standings are written to
        #[arg(short, long, default_value = "results.txt")]
        results: PathBuf,

        /// Take one turn per line of input instead of playing automatically
        #[arg(short, long)]
        interactive: bool,
    },

    /// Print the fewest-rolls route from start to goal
    Path {
        /// Board file (TOML); the classic board when omitted
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Search to run
        #[arg(short, long, value_enum, default_value = "both")]
        method: MethodArg,
    },
}

/// Route search selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Breadth-first search
    Bfs,
    /// Dijkstra's algorithm
    Dijkstra,
    /// Both, one after the other
    Both,
}
