//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, score storage).
//!
//! # Board Dimensions
//!
//! The board is square. Its side length is chosen once at startup and has
//! no upper bound in the engine:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIMENSION` | 2 | Smallest playable board |
//! | `DEFAULT_DIMENSION` | 4 | Classic 4x4 board |
//!
//! # Spawning
//!
//! A spawned tile is a 2 most of the time and a 4 with probability
//! `SPAWN_FOUR_PROBABILITY`.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Tile, DEFAULT_DIMENSION};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("up").unwrap();
//! assert!(dir.is_vertical());
//!
//! // Equal tiles merge into their sum
//! let merged = Tile::new(8).merge(Tile::new(8));
//! assert_eq!(merged, Some(Tile::new(16)));
//!
//! assert_eq!(DEFAULT_DIMENSION, 4);
//! ```

/// Smallest supported board side length.
pub const MIN_DIMENSION: usize = 2;

/// Board side length used when none (or an unparseable one) is supplied.
pub const DEFAULT_DIMENSION: usize = 4;

/// Value of the common spawned tile.
pub const SPAWN_LOW_VALUE: u64 = 2;

/// Value of the rare spawned tile.
pub const SPAWN_HIGH_VALUE: u64 = 4;

/// Probability that a spawned tile is `SPAWN_HIGH_VALUE` rather than `SPAWN_LOW_VALUE`.
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// A numbered tile. Values are powers of two, starting at 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u64);

impl Tile {
    /// Create a tile holding `value`.
    ///
    /// `value` must be a power of two no smaller than 2.
    pub fn new(value: u64) -> Self {
        debug_assert!(
            value >= 2 && value.is_power_of_two(),
            "tile value {} is not a power of two >= 2",
            value
        );
        Self(value)
    }

    /// Tile value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Combine two tiles of equal value into one holding their sum.
    ///
    /// Returns `None` when the values differ, or when the sum does not fit
    /// in a `u64` (a pair of 2^63 tiles stays put).
    pub fn merge(self, other: Tile) -> Option<Tile> {
        if self.0 == other.0 {
            self.0.checked_mul(2).map(Tile)
        } else {
            None
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding the tile
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<Tile>;

/// Numeric view of a cell: 0 for empty, otherwise the tile value.
#[inline]
pub fn cell_value(cell: Cell) -> u64 {
    cell.map(Tile::value).unwrap_or(0)
}

/// Inverse of [`cell_value`]: 0 is empty, anything else a tile.
#[inline]
pub fn cell_from_value(value: u64) -> Cell {
    if value == 0 {
        None
    } else {
        Some(Tile::new(value))
    }
}

/// The four move directions.
///
/// Up/Down are vertical and act on columns; Left/Right are horizontal and act on rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order used by `legal_moves`.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// True when tiles travel toward the high index end of a line (Right, Down).
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// A request produced by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the board in a direction.
    Move(Direction),
    /// Stop the session.
    Quit,
}
