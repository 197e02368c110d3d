//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine: the grid, the shift/merge
//! algorithm, tile spawning and game-over detection. It has **zero
//! dependencies** on rendering, input or storage, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: square grid with incremental occupancy tracking and directional shifts
//! - [`line`]: the single merge-toward-index-0 routine every direction reduces to
//! - [`game_state`]: score, spawn RNG, turn orchestration and game-over queries
//! - [`rng`]: seeded spawn draws (tile value and empty-cell choice)
//! - [`snapshot`]: owned copy of the game for renderers
//!
//! # Game Rules
//!
//! - **Slide**: all tiles move as far as possible in the chosen direction
//! - **Merge**: two equal tiles that meet become one tile with their sum;
//!   a tile merges at most once per move
//! - **Score**: every merge adds the merged value
//! - **Spawn**: a 2 (90%) or 4 (10%) appears in a random empty cell after
//!   every move that changed the board
//! - **Game over**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let mut game = GameState::with_board(board, 12345);
//!
//! let outcome = game.take_turn(Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.occupied_count(), 2); // merged tile + spawned tile
//! ```

pub mod board;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line, ShiftResult};
pub use game_state::{GameState, SpawnedTile, TurnOutcome};
pub use line::{merge_line, LineMerge};
pub use rng::SpawnRng;
pub use snapshot::GameSnapshot;
