use crate::types::DEFAULT_DIMENSION;

/// Owned, renderer-facing copy of the game.
///
/// Grid values are 0 for empty cells, otherwise the tile value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub dimension: usize,
    pub grid: Vec<Vec<u64>>,
    pub score: u64,
    pub moves: u32,
    pub max_tile: u64,
    pub game_over: bool,
}

impl GameSnapshot {
    /// An all-empty snapshot of the given size.
    pub fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            grid: vec![vec![0; dimension]; dimension],
            score: 0,
            moves: 0,
            max_tile: 0,
            game_over: false,
        }
    }

    /// Value at (row, col); 0 when empty or out of bounds.
    pub fn value(&self, row: usize, col: usize) -> u64 {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::empty(DEFAULT_DIMENSION)
    }
}
