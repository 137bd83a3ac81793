//! Injected randomness.

use rand::Rng;

/// Uniform integer draws used for shooter, group and cooldown selection.
///
/// Every `rand::Rng` is a `RandomSource`; the engine uses a seeded
/// `ChaCha8Rng` so runs are reproducible.
pub trait RandomSource {
    /// Uniform draw in `0..upper`. Returns 0 when `upper` is 0.
    fn next_below(&mut self, upper: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.gen_range(0..upper)
    }
}
