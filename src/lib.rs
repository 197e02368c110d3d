//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! that tie them together: the session loop ([`app`]), command-line
//! configuration ([`config`]) and the after-game menu ([`end_game`]).

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_scores as scores;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod app;
pub mod config;
pub mod end_game;
