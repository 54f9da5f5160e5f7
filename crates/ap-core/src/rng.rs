//! Session-level RNG wrapper.
//!
//! Demo randomness carries no correctness requirement, so a live session seeds
//! from OS entropy.  Tests pass a fixed seed to get repeatable registries.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The one RNG a session owns.  Used only from the event-dispatch thread.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic RNG for tests and reproducible demos.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is given, otherwise `from_entropy()`.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
