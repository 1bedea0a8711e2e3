//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! An engine owns exactly one `SimRng`.  Every random draw in a tick
//! (threshold sampling at build time, Bernoulli contact trials, uniform
//! displacements) pulls from it in a fixed order, so the same seed always
//! reproduces the same run.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Not shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh seed from the thread-local OS-seeded generator.
    ///
    /// Callers log the returned value so an unseeded run can be replayed.
    pub fn entropy_seed() -> u64 {
        rand::thread_rng().r#gen()
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

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    /// `amount` distinct indices from `0..length`, in draw order.
    ///
    /// # Panics
    /// Panics if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
