//! RNG module - seeded randomness for tile spawning
//!
//! All randomness in a game flows through one [`SpawnRng`] owned by the game
//! state, so the same seed always reproduces the same sequence of spawns.
//! Two draws are made per spawn: the tile value, then the position among the
//! currently empty cells.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Tile, SPAWN_FOUR_PROBABILITY, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// Seeded generator for spawn decisions.
#[derive(Debug, Clone)]
pub struct SpawnRng {
    seed: u64,
    rng: StdRng,
}

impl SpawnRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the value of the next spawned tile: usually 2, sometimes 4.
    pub fn next_tile(&mut self) -> Tile {
        if self.rng.gen_bool(SPAWN_FOUR_PROBABILITY) {
            Tile::new(SPAWN_HIGH_VALUE)
        } else {
            Tile::new(SPAWN_LOW_VALUE)
        }
    }

    /// Uniform index in `[0, len)`.
    ///
    /// `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Seed this generator was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(1)
    }
}
