//! Game state module - the board engine
//!
//! Ties together the board, the score and the spawn RNG. It applies moves,
//! spawns tiles after moves that changed the board, and answers the
//! game-over query without touching the live state.
//!
//! The engine is synchronous and has no internal locking. Callers that share
//! one instance between threads must serialize the mutating calls.

use tracing::{debug, trace};

use crate::board::Board;
use crate::rng::SpawnRng;
use crate::snapshot::GameSnapshot;
use crate::types::{cell_value, Direction, Tile};

/// Where a tile was spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub tile: Tile,
}

/// What a single turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    /// The move changed the board.
    pub changed: bool,
    /// Score added by the move's merges.
    pub gained: u64,
    /// Tile spawned after the move (only when `changed`).
    pub spawned: Option<SpawnedTile>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u64,
    /// Turns that changed the board.
    moves: u32,
    rng: SpawnRng,
    started: bool,
}

impl GameState {
    /// Create a new game with an empty `dimension` x `dimension` board.
    ///
    /// # Panics
    ///
    /// Panics if the dimension is unsupported (see [`Board::new`]).
    pub fn new(dimension: usize, seed: u64) -> Self {
        Self::with_board(Board::new(dimension), seed)
    }

    /// Create a game around an existing board, score 0.
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self {
            board,
            score: 0,
            moves: 0,
            rng: SpawnRng::new(seed),
            started: false,
        }
    }

    /// Start the game and spawn the first tile
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_tile();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn occupied_count(&self) -> usize {
        self.board.occupied_count()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current grid, 0 for empty cells.
    pub fn grid(&self) -> Vec<Vec<u64>> {
        self.board.to_grid()
    }

    /// Slide the board without spawning.
    ///
    /// Merged values are added to the score. Returns whether any cell changed.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let result = self.board.shift(direction);
        self.score = self.score.saturating_add(result.gained);
        result.changed
    }

    /// Place a 2 (usually) or a 4 in a uniformly chosen empty cell.
    ///
    /// Returns `None` and draws nothing when the board is full.
    pub fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.board.empty_count();
        if empty == 0 {
            return None;
        }

        let tile = self.rng.next_tile();
        let (row, col) = self.board.nth_empty(self.rng.next_index(empty))?;
        if !self.board.place(row, col, tile) {
            return None;
        }

        trace!(row, col, value = tile.value(), "tile spawned");
        Some(SpawnedTile { row, col, tile })
    }

    /// Apply a move and, if it changed the board, spawn a tile.
    ///
    /// A move that changes nothing leaves board and score untouched.
    pub fn take_turn(&mut self, direction: Direction) -> TurnOutcome {
        let before = self.score;
        if !self.apply_move(direction) {
            trace!(direction = direction.as_str(), "move had no effect");
            return TurnOutcome::default();
        }

        self.moves += 1;
        let gained = self.score - before;
        let spawned = self.spawn_tile();
        debug!(
            direction = direction.as_str(),
            gained,
            score = self.score,
            occupied = self.board.occupied_count(),
            "turn applied"
        );

        TurnOutcome {
            changed: true,
            gained,
            spawned,
        }
    }

    /// True when the board is full and no row or column holds two equal
    /// neighbours. Read-only.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() && !self.board.has_mergeable_pair()
    }

    /// Would a move in `direction` change the board?
    pub fn would_change(&self, direction: Direction) -> bool {
        self.board.would_change(direction)
    }

    /// Legal moves indexed by [`Direction::index`].
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|d| self.board.would_change(d))
    }

    /// Largest tile value on the board, 0 when empty.
    pub fn max_tile(&self) -> u64 {
        cell_value(self.board.max_tile())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            dimension: self.board.dimension(),
            grid: self.board.to_grid(),
            score: self.score,
            moves: self.moves,
            max_tile: self.max_tile(),
            game_over: self.is_game_over(),
        }
    }
}
