//! Randomness used by every stochastic step of the simulation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator owned by a `World`.
pub type SimRng = ChaCha8Rng;

/// Uniform real draws.
pub trait RandomSource {
    /// Draws from `[min, max)`. A degenerate or NaN range yields `min`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;

    /// True with probability `chance`; values outside `[0, 1]` saturate.
    fn chance(&mut self, chance: f64) -> bool {
        self.uniform(0.0, 1.0) < chance
    }
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if max.is_nan() || min.is_nan() || max <= min {
            return min;
        }
        if !(max - min).is_finite() {
            // Span overflows f64; interpolate instead of sampling the range directly.
            let t: f64 = self.gen();
            return (min * (1.0 - t) + max * t).clamp(min, max);
        }
        self.gen_range(min..max)
    }
}

/// Seeded when `seed` is given, otherwise drawn from OS entropy.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> SimRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
