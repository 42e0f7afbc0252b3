//! Random number generator abstraction.
//!
//! Production code wraps `rand`'s thread-local generator. Tests inject a
//! scripted implementation so topic picks and red-cell targets are repeatable.

use rand::Rng;

/// Abstraction over random number generation.
pub trait GameRng: Send {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `[min, max]` inclusive.
    fn range_inclusive(&mut self, min: i64, max: i64) -> i64;
}

/// Production RNG backed by [`rand::rng`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadGameRng;

impl GameRng for ThreadGameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        rand::rng().random_range(min..=max)
    }
}
