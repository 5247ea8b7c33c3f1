//! Injectable randomness for shuffling, drafting and room generation.
//!
//! ## Key Features
//!
//! - **Injectable**: every randomized operation takes `&mut R: RandomSource`
//! - **Deterministic**: same seed produces identical sequence
//! - **Forkable**: independent streams for room layout vs. deck shuffling
//!
//! ## Usage
//!
//! ```
//! use undercrypt::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut dungeon_rng = rng.fork();
//!
//! let roll = rng.next_f64();
//! assert!((0.0..1.0).contains(&roll));
//!
//! // Forks are deterministic - same parent seed, same fork sequence
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(dungeon_rng.next_f64(), again.next_f64());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform source over `[0, 1)`.
///
/// The engine never reaches for ambient randomness; anything that shuffles
/// or picks takes one of these explicitly.
pub trait RandomSource {
    /// Next value, uniformly distributed in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        // Guards against sources that hand back exactly 1.0.
        idx.min(len.saturating_sub(1))
    }

    /// Choose a random element from a slice.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if slice.is_empty() {
            None
        } else {
            let idx = self.index(slice.len());
            slice.get(idx)
        }
    }
}

/// Seedable RNG backed by ChaCha8.
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

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
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
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Handy for pinning shuffles in tests and replays.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source. An empty script always yields `0.0`.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
