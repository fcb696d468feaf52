//! Text driver tests.

use ladder_race::{
    FileRecorder, finish, play_interactive, play_to_end, report_routes, show_saved_results,
};
use std::io::Cursor;
use std::sync::Arc;
use strictly_ladders::{
    BoardTopology, MemoryRecorder, PathAnalyzer, Race, ScriptedDice, SearchMethod,
};

fn race(ladders: &[(u32, u32)], snakes: &[(u32, u32)], faces: &[u8]) -> Race<ScriptedDice> {
    let topology = Arc::new(BoardTopology::from_tables(ladders, snakes).unwrap());
    Race::new(topology, 2, ScriptedDice::new(faces.iter().copied()).unwrap()).unwrap()
}

fn text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_classic_routes_report() {
    let analyzer = PathAnalyzer::new(&BoardTopology::classic());
    let mut out = Vec::new();
    report_routes(
        &mut out,
        &analyzer,
        &[SearchMethod::BreadthFirst, SearchMethod::Dijkstra],
    )
    .unwrap();

    let out = text(out);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "[BFS] Min Moves: 7 Path: 1->38->39->45->67->68->74->100"
    );
    assert!(lines[1].starts_with("[Dijkstra] Min Moves: 7 Path: 1->"));
    assert!(lines[1].ends_with("->100"));
}

#[test]
fn test_unreachable_route_report() {
    let snakes: Vec<(u32, u32)> = (2..=7).map(|s| (s, 1)).collect();
    let topology = BoardTopology::from_tables(&[], &snakes).unwrap();
    let mut out = Vec::new();
    report_routes(&mut out, &PathAnalyzer::new(&topology), &[SearchMethod::BreadthFirst]).unwrap();
    assert_eq!(text(out), "[BFS] Unreachable\n");
}

#[test]
fn test_play_to_end_narrates_every_turn() {
    let mut race = race(&[(2, 100)], &[], &[1]);
    let mut out = Vec::new();
    play_to_end(&mut out, &mut race).unwrap();

    assert_eq!(
        text(out),
        "Player 1 rolled 1 from 1 to 2, climbed to 100 and wins!\n"
    );
    assert!(race.state().is_terminal());
}

#[test]
fn test_interactive_rolls_and_queries() {
    // Player 1 rolls 6 to 7, Player 2 lands on the ladder at 3.
    let mut race = race(&[(3, 100)], &[(50, 10)], &[6, 2]);
    let mut input = Cursor::new("p\n\nd\nr\n");
    let mut out = Vec::new();

    let finished = play_interactive(&mut input, &mut out, &mut race).unwrap();

    assert!(finished);
    let out = text(out);
    assert!(out.contains("[BFS] Min Moves: 1 Path: 1->100"));
    assert!(out.contains("Player 1 rolled 6 from 1 to 7"));
    assert!(out.contains("[Dijkstra] Min Moves: 1 Path: 1->100"));
    assert!(out.contains("Player 2 rolled 2 from 1 to 3, climbed to 100 and wins!"));
    assert_eq!(race.state().winner().map(|p| p.index()), Some(1));
}

#[test]
fn test_interactive_quit_leaves_race_open() {
    let mut race = race(&[], &[], &[4]);
    let mut input = Cursor::new("r\nq\nr\n");
    let mut out = Vec::new();

    let finished = play_interactive(&mut input, &mut out, &mut race).unwrap();

    assert!(!finished);
    assert!(!race.state().is_terminal());
    assert_eq!(race.state().positions()[0].get(), 5);
    assert_eq!(race.state().positions()[1].get(), 1);
}

#[test]
fn test_interactive_stops_at_end_of_input() {
    let mut race = race(&[], &[], &[4]);
    let mut input = Cursor::new("");
    let mut out = Vec::new();
    assert!(!play_interactive(&mut input, &mut out, &mut race).unwrap());
}

#[test]
fn test_unknown_command_is_reported() {
    let mut race = race(&[], &[], &[4]);
    let mut input = Cursor::new("x\nq\n");
    let mut out = Vec::new();
    play_interactive(&mut input, &mut out, &mut race).unwrap();
    assert!(text(out).contains("Unknown command: x"));
}

#[test]
fn test_finish_prints_winner_and_records() {
    let mut race = race(&[(2, 100)], &[], &[1]);
    play_to_end(&mut Vec::new(), &mut race).unwrap();

    let mut recorder = MemoryRecorder::new();
    let mut out = Vec::new();
    finish(&mut out, &race, &mut recorder).unwrap();

    assert_eq!(text(out), "Winner: Player 1!\n");
    assert_eq!(recorder.records().len(), 1);
}

#[test]
fn test_saved_results_are_echoed_from_disk() {
    let mut race = race(&[(2, 100)], &[], &[1]);
    play_to_end(&mut Vec::new(), &mut race).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.txt");
    let mut recorder = FileRecorder::new(path.clone());
    let mut out = Vec::new();
    finish(&mut out, &race, &mut recorder).unwrap();
    show_saved_results(&mut out, &recorder).unwrap();

    assert_eq!(
        text(out),
        format!(
            "Winner: Player 1!\nResults saved to {}:\n  Player 1: 100\n  Player 2: 1\n",
            path.display()
        )
    );
}

#[test]
fn test_missing_results_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = FileRecorder::new(dir.path().join("never_written.txt"));
    assert!(show_saved_results(&mut Vec::new(), &recorder).is_err());
}

#[test]
fn test_finish_refuses_unfinished_race() {
    let race = race(&[], &[], &[4]);
    let mut recorder = MemoryRecorder::new();
    assert!(finish(&mut Vec::new(), &race, &mut recorder).is_err());
    assert!(recorder.records().is_empty());
}
