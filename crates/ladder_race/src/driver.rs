//! Text drivers: play a race, answer route queries, and print results.
//!
//! Drivers write narration to any `Write` and read commands from any
//! `BufRead`, so the binary hands them stdout/stdin while tests hand them
//! buffers.

use crate::recorder::FileRecorder;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_ladders::{
    DiceSource, PathAnalyzer, PathQueryResult, Race, ResultRecorder, SearchMethod,
};
use tracing::{debug, info, instrument, warn};

/// Writes one route query result.
///
/// `[BFS] Min Moves: 7 Path: 1->38->...->100`, or `[BFS] Unreachable`.
pub fn write_route(
    out: &mut impl Write,
    method: SearchMethod,
    result: &PathQueryResult,
) -> std::io::Result<()> {
    match result {
        PathQueryResult::Reachable(path) => writeln!(
            out,
            "[{}] Min Moves: {} Path: {}",
            method,
            path.moves(),
            path
        ),
        PathQueryResult::Unreachable => writeln!(out, "[{}] Unreachable", method),
    }
}

/// Runs each requested search against `analyzer` and writes the results.
#[instrument(skip(out, analyzer))]
pub fn report_routes(
    out: &mut impl Write,
    analyzer: &PathAnalyzer,
    methods: &[SearchMethod],
) -> Result<()> {
    for &method in methods {
        let result = analyzer.compute(method);
        debug!(%method, moves = ?result.moves(), "Route computed");
        write_route(out, method, &result)?;
    }
    Ok(())
}

/// Plays turns until someone wins, narrating each one.
#[instrument(skip_all)]
pub fn play_to_end<D: DiceSource>(out: &mut impl Write, race: &mut Race<D>) -> Result<()> {
    while !race.state().is_terminal() {
        let turn = race.advance_turn()?;
        writeln!(out, "{}", turn)?;
    }
    Ok(())
}

/// Drives a race from line commands.
///
/// Each line is one command: empty or `r` rolls for the player to move,
/// `p` prints the breadth-first route, `d` prints the Dijkstra route, `q`
/// stops early. Returns `true` when the race finished.
#[instrument(skip_all)]
pub fn play_interactive<D: DiceSource>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    race: &mut Race<D>,
) -> Result<bool> {
    writeln!(out, "Enter: roll | p: BFS route | d: Dijkstra route | q: quit")?;
    let mut line = String::new();
    while !race.state().is_terminal() {
        if let Some(player) = race.state().to_move() {
            write!(out, "{} to move> ", player)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line).context("Failed to read command")? == 0 {
            info!("Input closed before the race ended");
            return Ok(false);
        }

        match line.trim() {
            "" | "r" => {
                let turn = race.advance_turn()?;
                writeln!(out, "{}", turn)?;
            }
            "p" => write_route(out, SearchMethod::BreadthFirst, &race.query_min_moves_path())?,
            "d" => write_route(out, SearchMethod::Dijkstra, &race.query_shortest_weighted_path())?,
            "q" => {
                info!("Race abandoned");
                return Ok(false);
            }
            other => {
                warn!(command = other, "Unknown command");
                writeln!(out, "Unknown command: {}", other)?;
            }
        }
    }
    Ok(true)
}

/// Announces the winner and hands the standings to `recorder`.
#[instrument(skip_all)]
pub fn finish<D: DiceSource>(
    out: &mut impl Write,
    race: &Race<D>,
    recorder: &mut impl ResultRecorder,
) -> Result<()> {
    race.record_standings(recorder)?;
    if let Some(winner) = race.state().winner() {
        writeln!(out, "Winner: {}!", winner)?;
    }
    Ok(())
}

/// Reads the results file back and prints it as the final scoreboard.
#[instrument(skip_all, fields(path = %recorder.path().display()))]
pub fn show_saved_results(out: &mut impl Write, recorder: &FileRecorder) -> Result<()> {
    let lines = recorder
        .read_back()
        .context("Failed to read saved results")?;
    writeln!(out, "Results saved to {}:", recorder.path().display())?;
    for line in lines {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}
