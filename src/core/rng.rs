//! Deterministic random number generation for randomized scoring.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical turn choices
//! - **Forkable**: Independent streams per player in a game
//!
//! ```
//! use santorini_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut player_b = rng.fork();
//!
//! let a = rng.gen_score(1..=100);
//! let b = player_b.gen_score(1..=100);
//! assert!((1..=100).contains(&a) && (1..=100).contains(&b));
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw a score uniformly from an inclusive range.
    ///
    /// Panics if `range` is empty; callers check ranges when they are
    /// configured.
    pub fn gen_score(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }
}
