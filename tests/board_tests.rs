//! Board tests - move rules seen through the facade crate

use tui_2048::core::{merge_line, Board, GameState};
use tui_2048::types::{cell_from_value, cell_value, Direction};

fn row_values(board: &Board, row: usize) -> Vec<u64> {
    board.row(row).iter().map(|&c| cell_value(c)).collect()
}

#[test]
fn test_no_chain_merge() {
    let mut board = Board::from_rows(&[[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    let result = board.shift(Direction::Left);
    assert!(result.changed);
    assert_eq!(result.merges, 2);
    assert_eq!(result.gained, 8);
    assert_eq!(row_values(&board, 0), vec![4, 4, 0, 0]);

    let mut board = Board::from_rows(&[[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    board.shift(Direction::Right);
    assert_eq!(row_values(&board, 0), vec![0, 0, 4, 4]);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    let mut board = Board::from_rows(&[[4, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
    board.shift(Direction::Left);
    assert_eq!(row_values(&board, 0), vec![4, 4, 0, 0]);
}

#[test]
fn test_compaction() {
    let mut board = Board::from_rows(&[[0, 2, 0, 4], [0; 4], [0; 4], [0; 4]]);
    let result = board.shift(Direction::Left);
    assert!(result.changed);
    assert_eq!(result.gained, 0);
    assert_eq!(row_values(&board, 0), vec![2, 4, 0, 0]);

    let mut board = Board::from_rows(&[[0, 2, 0, 4], [0; 4], [0; 4], [0; 4]]);
    board.shift(Direction::Right);
    assert_eq!(row_values(&board, 0), vec![0, 0, 2, 4]);
}

#[test]
fn test_vertical_moves_operate_on_columns() {
    let mut board = Board::from_rows(&[[2, 0, 0], [2, 4, 0], [0, 4, 8]]);
    let result = board.shift(Direction::Up);
    assert_eq!(result.gained, 4 + 8);
    assert_eq!(board.to_grid(), vec![vec![4, 8, 8], vec![0, 0, 0], vec![0, 0, 0]]);

    let mut board = Board::from_rows(&[[2, 0, 0], [2, 4, 0], [0, 4, 8]]);
    board.shift(Direction::Down);
    assert_eq!(board.to_grid(), vec![vec![0, 0, 0], vec![0, 0, 0], vec![4, 8, 8]]);
}

#[test]
fn test_up_matches_transposed_left() {
    let board = Board::from_rows(&[[2, 0, 4, 4], [2, 8, 0, 4], [0, 8, 2, 0], [4, 0, 2, 2]]);

    let mut up = board.clone();
    up.shift(Direction::Up);

    let mut left = board.transposed();
    left.shift(Direction::Left);

    assert_eq!(up.transposed(), left);
}

#[test]
fn test_unchanged_move_reports_no_change() {
    let mut board = Board::from_rows(&[[2, 4], [8, 16]]);
    let before = board.clone();
    for dir in Direction::ALL {
        let result = board.shift(dir);
        assert!(!result.changed, "{} should not change the board", dir.as_str());
        assert!(!board.would_change(dir));
    }
    assert_eq!(board, before);
}

#[test]
fn test_occupied_count_tracks_merges() {
    let mut board = Board::from_rows(&[[2, 2, 4, 4], [8, 0, 8, 0], [0; 4], [2, 0, 0, 0]]);
    assert_eq!(board.occupied_count(), 7);
    let result = board.shift(Direction::Left);
    assert_eq!(result.merges, 3);
    assert_eq!(board.occupied_count(), 4);
    assert_eq!(board.empty_count(), 12);
}

#[test]
fn test_mergeable_pair_detection() {
    let full_alternating = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(full_alternating.is_full());
    assert!(!full_alternating.has_mergeable_pair());

    let vertical_pair = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]]);
    assert!(vertical_pair.has_mergeable_pair());
}

#[test]
fn test_merge_line_is_shared_by_all_directions() {
    let line = [cell_from_value(2), None, cell_from_value(2), cell_from_value(8)];
    let merged = merge_line(&line);
    let values: Vec<u64> = merged.cells.iter().map(|&c| cell_value(c)).collect();
    assert_eq!(values, vec![4, 8, 0, 0]);
    assert_eq!(merged.gained, 4);
    assert_eq!(merged.merges, 1);
    assert!(merged.differs_from(&line));
}

#[test]
#[should_panic(expected = "board dimension")]
fn test_dimension_below_minimum_panics() {
    let _ = Board::new(1);
}

#[test]
fn test_large_boards_shift_and_detect_game_over() {
    let d = 20;

    // Every row is [2, 2, 4, 4, ...]: half the tiles merge on a Left move.
    let rows: Vec<Vec<u64>> = (0..d)
        .map(|_| (0..d).map(|col| if col % 4 < 2 { 2 } else { 4 }).collect())
        .collect();
    let mut board = Board::from_grid(&rows);
    assert!(board.is_full());
    assert!(!GameState::with_board(board.clone(), 1).is_game_over());

    let result = board.shift(Direction::Left);
    assert!(result.changed);
    assert_eq!(result.merges, d * d / 2);
    assert_eq!(board.occupied_count(), d * d / 2);
    assert_eq!(row_values(&board, 7)[..4], [4, 8, 4, 8]);
    assert_eq!(row_values(&board, 7)[d / 2..], vec![0; d / 2][..]);

    // A checkerboard of distinct neighbours is stuck.
    let stuck: Vec<Vec<u64>> = (0..d)
        .map(|row| (0..d).map(|col| if (row + col) % 2 == 0 { 2 } else { 4 }).collect())
        .collect();
    let game = GameState::with_board(Board::from_grid(&stuck), 1);
    assert!(game.is_game_over());
    assert_eq!(game.legal_moves(), [false; 4]);
}

#[test]
fn test_engine_accepts_boards_past_sixteen() {
    let mut game = GameState::new(32, 1);
    game.start();
    assert_eq!(game.dimension(), 32);
    assert_eq!(game.occupied_count(), 1);
    for dir in Direction::ALL {
        game.take_turn(dir);
    }
    assert_eq!(game.grid().len(), 32);
}

#[test]
fn test_huge_tiles_merge_without_overflow() {
    let big = 1u64 << 31;
    let mut board = Board::from_rows(&[[big, big], [0, 0]]);
    let result = board.shift(Direction::Left);
    assert_eq!(result.gained, 1 << 32);
    assert_eq!(row_values(&board, 0), vec![1 << 32, 0]);

    let top = 1u64 << 63;
    let mut board = Board::from_rows(&[[top, top], [2, 4]]);
    assert!(!board.shift(Direction::Left).changed);
    assert!(!board.would_change(Direction::Left));
}
