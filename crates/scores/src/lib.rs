//! Leaderboard storage.
//!
//! High scores live in a small JSON object (`{"name": score, ...}`) under the
//! user's data directory. The board engine never touches this crate; the
//! binary records the final score once a session ends.

pub mod leaderboard;

pub use leaderboard::{
    resolve_data_dir, Leaderboard, ScoreEntry, ScoreStoreError, DATA_DIR_ENV, GAME_DIRECTORY_NAME,
    LEADERBOARD_FILE_NAME,
};
