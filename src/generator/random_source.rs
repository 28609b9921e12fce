use rand::SeedableRng;
use rand::distributions::{Distribution, Standard};
use rand_pcg::Pcg64;

use crate::config::constants::seed::MAX_SAFE_F64_SEED;
use crate::error::{PathError, PathResult};

/// Seeded uniform stream. PCG-64 has a fixed, documented output sequence,
/// so a given seed yields the same values on every platform and run.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Pcg64,
}

impl RandomSource {
    pub fn new(seed: i64) -> PathResult<Self> {
        let seed = u64::try_from(seed)
            .map_err(|_| PathError::InvalidSeed(format!("seed must be >= 0 (got {})", seed)))?;
        Ok(Self {
            rng: Pcg64::seed_from_u64(seed),
        })
    }

    /// For seeds that arrive as plain numbers (JSON, query strings).
    /// Must be a non-negative integer no larger than 2^53 - 1.
    pub fn from_f64(seed: f64) -> PathResult<Self> {
        if !seed.is_finite() || seed.fract() != 0.0 {
            return Err(PathError::InvalidSeed(format!(
                "seed must be an integer (got {})",
                seed
            )));
        }
        if !(0.0..=MAX_SAFE_F64_SEED).contains(&seed) {
            return Err(PathError::InvalidSeed(format!(
                "seed must be in [0, {}] (got {})",
                MAX_SAFE_F64_SEED, seed
            )));
        }
        Self::new(seed as i64)
    }

    /// Uniform in [0, 1).
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        Standard.sample(&mut self.rng)
    }

    /// Uniform in [-1, 1).
    #[inline]
    pub fn next_signed(&mut self) -> f64 {
        2.0 * self.next() - 1.0
    }

    /// Uniform in [lo, hi). Returns `lo` when the range is empty.
    #[inline]
    pub fn next_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next() * (hi - lo).max(0.0)
    }
}
