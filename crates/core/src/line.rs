//! Line module - the canonical merge-toward-index-0 routine
//!
//! Every move is reduced to the same operation on each line (a row or a
//! column read in move order): compact the tiles toward index 0 and merge
//! equal neighbours. The board decides which cells form a line and in which
//! order they are read; this module never sees directions.

use crate::types::{Cell, Tile};

/// Result of merging one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMerge {
    /// Output cells, same length as the input line.
    pub cells: Vec<Cell>,
    /// Sum of every merged tile produced.
    pub gained: u64,
    /// Number of merges (each one removes a tile).
    pub merges: usize,
}

impl LineMerge {
    /// True if the output differs from `line` in any cell.
    pub fn differs_from(&self, line: &[Cell]) -> bool {
        self.cells.as_slice() != line
    }
}

/// Compact and merge a line toward index 0.
///
/// Each tile takes part in at most one merge per call, so `[2, 2, 2, 2]`
/// becomes `[4, 4, _, _]`.
pub fn merge_line(line: &[Cell]) -> LineMerge {
    let tiles: Vec<Tile> = line.iter().flatten().copied().collect();

    let mut cells = Vec::with_capacity(line.len());
    let mut gained = 0u64;
    let mut merges = 0usize;

    let mut i = 0;
    while i < tiles.len() {
        let current = tiles[i];
        match tiles.get(i + 1).and_then(|&next| current.merge(next)) {
            Some(merged) => {
                gained = gained.saturating_add(merged.value());
                merges += 1;
                cells.push(Some(merged));
                i += 2;
            }
            None => {
                cells.push(Some(current));
                i += 1;
            }
        }
    }

    while cells.len() < line.len() {
        cells.push(None);
    }

    LineMerge {
        cells,
        gained,
        merges,
    }
}

/// Would [`merge_line`] change this line?
///
/// A line is unaffected iff its tiles already sit at the front with no gap
/// and no two consecutive tiles are equal.
pub fn line_would_change(line: &[Cell]) -> bool {
    let mut seen_gap = false;
    let mut prev: Option<Tile> = None;

    for cell in line {
        match *cell {
            None => seen_gap = true,
            Some(tile) => {
                if seen_gap || mergeable(prev, tile) {
                    return true;
                }
                prev = Some(tile);
            }
        }
    }

    false
}

/// True if two equal tiles are neighbours once empties are discarded.
pub fn line_has_pair(line: &[Cell]) -> bool {
    let mut prev: Option<Tile> = None;
    for tile in line.iter().flatten() {
        if mergeable(prev, *tile) {
            return true;
        }
        prev = Some(*tile);
    }
    false
}

fn mergeable(prev: Option<Tile>, tile: Tile) -> bool {
    prev.and_then(|p| p.merge(tile)).is_some()
}
