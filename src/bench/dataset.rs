//! Random dataset generation
//!
//! The RNG is injected so tests and repeated runs are reproducible. When
//! no seed is configured one is drawn from entropy and kept, so the report
//! can name the seed that produced it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

pub struct DatasetGenerator<R = StdRng> {
    rng: R,
    max_value: i32,
    seed: Option<u64>,
}

impl DatasetGenerator<StdRng> {
    /// Seeded `StdRng` generator. `None` picks a fresh seed from entropy.
    pub fn new(seed: Option<u64>, max_value: i32) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_value,
            seed: Some(seed),
        }
    }
}

impl<R: Rng> DatasetGenerator<R> {
    /// Wrap a caller-provided RNG.
    pub fn with_rng(rng: R, max_value: i32) -> Self {
        Self {
            rng,
            max_value,
            seed: None,
        }
    }

    /// `count` values drawn uniformly from `0..max_value`.
    ///
    /// A `max_value` below 1 is clamped to 1, so every value is 0.
    /// `BenchConfig::validate` rejects such bounds before a run gets here.
    pub fn generate(&mut self, count: usize) -> Vec<i32> {
        let bound = self.max_value.max(1);
        if bound != self.max_value {
            warn!("max_value {} clamped to 1", self.max_value);
        }
        (0..count).map(|_| self.rng.gen_range(0..bound)).collect()
    }

    /// Seed behind this generator, if it was built from one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_data() {
        let a = DatasetGenerator::new(Some(1234), 10_000).generate(100);
        let b = DatasetGenerator::new(Some(1234), 10_000).generate(100);
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn test_values_within_bound() {
        let mut generator = DatasetGenerator::new(Some(5), 10);
        assert!(generator.generate(1000).iter().all(|v| (0..10).contains(v)));
    }

    #[test]
    fn test_non_positive_bound_yields_zeros() {
        for max_value in [0, -5] {
            let data = DatasetGenerator::new(Some(11), max_value).generate(50);
            assert_eq!(data.len(), 50);
            assert!(data.iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let generator = DatasetGenerator::new(None, 100);
        assert!(generator.seed().is_some());
    }

    #[test]
    fn test_injected_rng() {
        let mut generator = DatasetGenerator::with_rng(StdRng::seed_from_u64(3), 50);
        let data = generator.generate(20);
        assert!(generator.seed().is_none());
        assert_eq!(data, DatasetGenerator::new(Some(3), 50).generate(20));
    }
}
