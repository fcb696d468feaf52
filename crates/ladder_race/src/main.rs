//! Ladder Race - CLI entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use ladder_race::cli::{Cli, Command, MethodArg};
use ladder_race::{
    FileRecorder, finish, load_topology, play_interactive, play_to_end, report_routes,
    show_saved_results,
};
use std::path::PathBuf;
use std::sync::Arc;
use strictly_ladders::{PathAnalyzer, Race, RandomDice, SearchMethod};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            players,
            seed,
            board,
            results,
            interactive,
        } => run_play(players, seed, board, results, interactive),
        Command::Path { board, method } => run_path(board, method),
    }
}

/// Play a race and record the final standings
#[instrument]
fn run_play(
    players: usize,
    seed: Option<u64>,
    board: Option<PathBuf>,
    results: PathBuf,
    interactive: bool,
) -> Result<()> {
    let topology = Arc::new(load_topology(board.as_deref())?);
    let dice = match seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::from_entropy(),
    };
    let mut race = Race::new(topology, players, dice)?;
    info!(players, "Starting race");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let finished = if interactive {
        play_interactive(&mut std::io::stdin().lock(), &mut out, &mut race)?
    } else {
        play_to_end(&mut out, &mut race)?;
        true
    };

    if finished {
        let mut recorder = FileRecorder::new(results);
        finish(&mut out, &race, &mut recorder)?;
        show_saved_results(&mut out, &recorder)?;
    }
    Ok(())
}

/// Print optimal routes for a board
#[instrument]
fn run_path(board: Option<PathBuf>, method: MethodArg) -> Result<()> {
    let topology = load_topology(board.as_deref())?;
    let analyzer = PathAnalyzer::new(&topology);
    let methods: &[SearchMethod] = match method {
        MethodArg::Bfs => &[SearchMethod::BreadthFirst],
        MethodArg::Dijkstra => &[SearchMethod::Dijkstra],
        MethodArg::Both => &[SearchMethod::BreadthFirst, SearchMethod::Dijkstra],
    };
    report_routes(&mut std::io::stdout().lock(), &analyzer, methods)
}
