//! Board module - manages the game grid
//!
//! The board is a square `d x d` grid where each cell is empty or holds a tile.
//! Uses a flat vector in row-major order for cache locality; the dimension is
//! fixed at construction.
//! Coordinates: (row, col), row 0 at the top, col 0 on the left.
//!
//! The number of occupied cells is tracked incrementally by every mutating
//! operation and is never recomputed from the cells after construction.

use crate::line::{line_has_pair, line_would_change, merge_line};
use crate::types::{cell_from_value, cell_value, Cell, Direction, Tile, MIN_DIMENSION};

/// A row or column, copied out of the board.
pub type Line = Vec<Cell>;

/// Summary of one shift over the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftResult {
    /// True if any cell changed value.
    pub changed: bool,
    /// Sum of all merged tiles created by the shift.
    pub gained: u64,
    /// Number of merges performed.
    pub merges: usize,
}

/// The game board - `dimension` x `dimension` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    /// Flat vector of cells, row-major order (row * dimension + col)
    cells: Vec<Cell>,
    occupied: usize,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is below `MIN_DIMENSION`. There is no upper bound.
    pub fn new(dimension: usize) -> Self {
        assert!(
            dimension >= MIN_DIMENSION,
            "board dimension {} is below {}",
            dimension,
            MIN_DIMENSION
        );
        Self {
            dimension,
            cells: vec![None; dimension * dimension],
            occupied: 0,
        }
    }

    /// Build a board from rows of numbers (0 = empty).
    ///
    /// This is the one place the occupied count is derived by counting.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square of a supported dimension.
    pub fn from_grid(rows: &[Vec<u64>]) -> Self {
        Self::from_row_slices(rows.iter().map(Vec::as_slice), rows.len())
    }

    /// Array-literal flavour of [`Board::from_grid`].
    pub fn from_rows<const N: usize>(rows: &[[u64; N]]) -> Self {
        Self::from_row_slices(rows.iter().map(|r| r.as_slice()), rows.len())
    }

    fn from_row_slices<'a>(rows: impl Iterator<Item = &'a [u64]>, dimension: usize) -> Self {
        let mut board = Self::new(dimension);
        for (row, values) in rows.enumerate() {
            assert_eq!(values.len(), dimension, "row {} is not square", row);
            for (col, &value) in values.iter().enumerate() {
                let cell = cell_from_value(value);
                board.cells[row * dimension + col] = cell;
                if cell.is_some() {
                    board.occupied += 1;
                }
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        Some(row * self.dimension + col)
    }

    /// Flat index of the `pos`-th cell of line `line` when read in move order.
    ///
    /// Horizontal moves read rows, vertical moves read columns; Right and Down
    /// read from the far end so every move merges toward position 0.
    #[inline(always)]
    fn line_index(&self, direction: Direction, line: usize, pos: usize) -> usize {
        let d = self.dimension;
        let far = d - 1 - pos;
        match direction {
            Direction::Left => line * d + pos,
            Direction::Right => line * d + far,
            Direction::Up => pos * d + line,
            Direction::Down => far * d + line,
        }
    }

    fn read_line(&self, direction: Direction, line: usize) -> Line {
        (0..self.dimension)
            .map(|pos| self.cells[self.line_index(direction, line, pos)])
            .collect()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells holding a tile.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Place a tile in an empty cell.
    ///
    /// Returns false (and leaves the board unchanged) if the position is out
    /// of bounds or already occupied.
    pub fn place(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(tile);
                self.occupied += 1;
                true
            }
            _ => false,
        }
    }

    /// Position of the `n`-th empty cell in row-major order.
    pub fn nth_empty(&self, n: usize) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .nth(n)
            .map(|(idx, _)| (idx / self.dimension, idx % self.dimension))
    }

    /// Row `row`, left to right.
    pub fn row(&self, row: usize) -> Line {
        self.read_line(Direction::Left, row)
    }

    /// Column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Line {
        self.read_line(Direction::Up, col)
    }

    /// A copy of the board with rows and columns swapped.
    pub fn transposed(&self) -> Board {
        let d = self.dimension;
        let mut cells = vec![None; d * d];
        for row in 0..d {
            for col in 0..d {
                cells[col * d + row] = self.cells[row * d + col];
            }
        }
        Board {
            dimension: d,
            cells,
            occupied: self.occupied,
        }
    }

    /// Slide every line in `direction`, merging equal neighbours.
    ///
    /// Each line is read in move order, merged toward position 0 and written
    /// back in the same order, so one routine serves all four directions.
    /// Lines that do not change are not written.
    pub fn shift(&mut self, direction: Direction) -> ShiftResult {
        let mut result = ShiftResult::default();

        for line in 0..self.dimension {
            let before = self.read_line(direction, line);
            let merged = merge_line(&before);
            if !merged.differs_from(&before) {
                continue;
            }

            for (pos, cell) in merged.cells.iter().enumerate() {
                let idx = self.line_index(direction, line, pos);
                self.cells[idx] = *cell;
            }

            result.changed = true;
            result.gained = result.gained.saturating_add(merged.gained);
            result.merges += merged.merges;
        }

        self.occupied -= result.merges;
        result
    }

    /// Would `shift(direction)` change the board?
    ///
    /// Read-only line scan; agrees with shifting a copy and comparing.
    pub fn would_change(&self, direction: Direction) -> bool {
        (0..self.dimension).any(|line| line_would_change(&self.read_line(direction, line)))
    }

    /// True if some row or column has two equal tiles with only empties between them.
    pub fn has_mergeable_pair(&self) -> bool {
        (0..self.dimension).any(|i| line_has_pair(&self.row(i)) || line_has_pair(&self.column(i)))
    }

    /// Largest tile on the board.
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .fold(0u64, |sum, t| sum.saturating_add(t.value()))
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of numbers, 0 for empty cells.
    pub fn to_grid(&self) -> Vec<Vec<u64>> {
        self.cells
            .chunks(self.dimension)
            .map(|row| row.iter().map(|&c| cell_value(c)).collect())
            .collect()
    }
}
