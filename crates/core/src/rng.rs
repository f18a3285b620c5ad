//! RNG module - injectable randomness for tile spawns
//!
//! The engine never touches a global generator. Every random decision goes
//! through [`TileSource`], which exposes exactly two capabilities:
//!
//! - pick one of `k` equally likely outcomes ([`TileSource::pick_index`])
//! - pick one entry of a weighted table ([`TileSource::pick_weighted`])
//!
//! [`SeededRng`] backs real games with a PCG stream. [`ScriptedSource`]
//! replays a fixed sequence for tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of randomness for spawning tiles.
pub trait TileSource {
    /// Return a value in `0..len`, each equally likely. `len` is never 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Return an index into `weights`, chosen with probability proportional
    /// to its weight. An all-zero (or empty) table yields 0 without drawing.
    fn pick_weighted(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return 0;
        }
        let mut roll = self.pick_index(total as usize) as u32;
        for (i, &w) in weights.iter().enumerate() {
            if roll < w {
                return i;
            }
            roll -= w;
        }
        weights.len().saturating_sub(1)
    }
}

impl<T: TileSource + ?Sized> TileSource for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn pick_weighted(&mut self, weights: &[u32]) -> usize {
        (**self).pick_weighted(weights)
    }
}

/// Seeded PCG generator. Same seed, same game.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: Pcg32,
    seed: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with (not its current position).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileSource for SeededRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of picks, cycling when it runs out.
///
/// Each pick is reduced modulo the requested range, so a script never
/// produces an out-of-range index. Weighted picks go through
/// [`TileSource::pick_index`] over the total weight: with the default spawn
/// table, picks 0..=8 yield a 2 and pick 9 yields a 4.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    cursor: usize,
    calls: usize,
}

impl ScriptedSource {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
            calls: 0,
        }
    }

    /// A source that always answers 0 (first empty cell, tile 2).
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// Number of `pick_index` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl TileSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.calls += 1;
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}
