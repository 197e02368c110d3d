//! After-game menu driven by scripted stdin.

use std::io::Cursor;

use tempfile::tempdir;

use tui_2048::end_game::run_end_game;
use tui_2048::scores::Leaderboard;

fn run(
    board: &Leaderboard,
    score: u64,
    player: Option<&str>,
    script: &str,
) -> (Option<String>, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let saved = run_end_game(board, score, player, &mut input, &mut out).unwrap();
    (saved, String::from_utf8_lossy(&out).into_owned())
}

fn scores(board: &Leaderboard) -> Vec<(String, u64)> {
    board
        .ranked()
        .unwrap()
        .into_iter()
        .map(|e| (e.name, e.score))
        .collect()
}

#[test]
fn save_uses_the_command_line_name() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::open(dir.path()).unwrap();

    let (saved, out) = run(&board, 512, Some("ada"), "s\n");
    assert_eq!(saved.as_deref(), Some("ada"));
    assert!(out.contains("New personal best for ada!"));
    assert!(out.contains("512"));
    assert_eq!(scores(&board), vec![("ada".to_string(), 512)]);
}

#[test]
fn save_asks_for_a_name_when_none_was_given() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::open(dir.path()).unwrap();

    let (saved, out) = run(&board, 64, None, "S\n  bob \n");
    assert_eq!(saved.as_deref(), Some("bob"));
    assert!(out.contains("Name: "));
    assert_eq!(scores(&board), vec![("bob".to_string(), 64)]);
}

#[test]
fn blank_name_returns_to_the_menu() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::open(dir.path()).unwrap();

    let (saved, out) = run(&board, 64, None, "s\n\nq\n");
    assert_eq!(saved, None);
    assert!(out.contains("A name is needed to save the score."));
    assert!(board.ranked().unwrap().is_empty());
}

#[test]
fn edit_renames_and_removes_players() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::open(dir.path()).unwrap();
    board.record("ada", 2048).unwrap();
    board.record("bob", 128).unwrap();

    let (saved, _) = run(&board, 0, None, "e\nrename ada lovelace\ne\nrm bob\nq\n");
    assert_eq!(saved, None);
    assert_eq!(scores(&board), vec![("lovelace".to_string(), 2048)]);
}

#[test]
fn edit_reports_bad_requests_and_keeps_going() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::open(dir.path()).unwrap();
    board.record("ada", 2048).unwrap();
    board.record("bob", 128).unwrap();

    let script = "e\nremove zed\ne\nrename bob ada\ne\npromote bob\nq\n";
    let (saved, out) = run(&board, 0, None, script);
    assert_eq!(saved, None);
    assert!(out.contains("unknown player: zed"));
    assert!(out.contains("player name already taken: ada"));
    assert!(out.contains("Unrecognized edit: promote bob"));
    assert_eq!(board.ranked().unwrap().len(), 2);
}

#[test]
fn edit_then_save_in_one_visit() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::open(dir.path()).unwrap();
    board.record("ada", 4096).unwrap();

    let (saved, out) = run(&board, 1024, Some("ada"), "e\nrename ada grace\ns\n");
    assert_eq!(saved.as_deref(), Some("ada"));
    assert!(out.contains("New personal best for ada!"));
    assert_eq!(
        scores(&board),
        vec![("grace".to_string(), 4096), ("ada".to_string(), 1024)]
    );
}

#[test]
fn quit_and_end_of_input_save_nothing() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::open(dir.path()).unwrap();

    let (saved, out) = run(&board, 256, Some("ada"), "x\nquit\n");
    assert_eq!(saved, None);
    assert!(out.contains("Unknown choice: x"));

    let (saved, _) = run(&board, 256, Some("ada"), "");
    assert_eq!(saved, None);
    assert!(board.ranked().unwrap().is_empty());
}
