//! Terminal renderer for the 2048 board.
//!
//! Renders into a simple framebuffer that is flushed to the terminal with
//! crossterm. No widget toolkit is involved.
//!
//! - [`game_view`]: pure snapshot -> framebuffer mapping
//! - [`leaderboard_view`]: plain-text leaderboard table
//! - [`renderer`]: diffing terminal backend

pub mod fb;
pub mod game_view;
pub mod leaderboard_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_scores as scores;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, StatusView, Viewport};
pub use leaderboard_view::{leaderboard_lines, TableLine};
pub use renderer::{encode_diff_into, encode_full_into, write_table, TerminalRenderer};
