//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] values. Keys with no
//! meaning in the game map to `None` and never reach the engine.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
