// src/rng.rs
//! Random Number Generation for Monte Carlo Valuation
//!
//! # Design Philosophy
//!
//! Valuation results must be reproducible and must not depend on how scenarios
//! are scheduled across threads:
//! 1. **Reproducibility**: Same root seed → same scenario seeds → same paths
//! 2. **Parallel safety**: Each path owns its generator; nothing is shared
//! 3. **Order independence**: Scenario seeds are drawn sequentially from a
//!    single root stream *before* any work is dispatched
//!
//! # Two-Level Seeding
//!
//! ```text
//! root_seed ──StdRng──► u₁, u₂, …, uₙ   (uniform over u32)
//!                         │   │       │
//!                      path₁ path₂ … pathₙ   (StdRng::seed_from_u64(uᵢ))
//! ```
//!
//! Standard normal increments are sampled with `rand_distr::StandardNormal`.

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Root stream of per-scenario seeds
///
/// Each call to [`SeedSequence::next_seed`] consumes exactly one draw from
/// the root engine, so the i-th scenario always receives the i-th draw.
#[derive(Debug, Clone)]
pub struct SeedSequence {
    root: StdRng,
    dist: Uniform<u32>,
}

impl SeedSequence {
    pub fn new(root_seed: u64) -> Self {
        Self {
            root: StdRng::seed_from_u64(root_seed),
            dist: Uniform::new_inclusive(0, u32::MAX),
        }
    }

    /// Next scenario seed from the root stream
    pub fn next_seed(&mut self) -> u64 {
        u64::from(self.dist.sample(&mut self.root))
    }

    /// Next `n` scenario seeds, in scenario order
    pub fn take_seeds(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.next_seed()).collect()
    }
}

/// Per-path generator for a scenario seed
pub fn path_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sequence_reproducibility() {
        let mut seq1 = SeedSequence::new(42);
        let mut seq2 = SeedSequence::new(42);

        for _ in 0..100 {
            assert_eq!(seq1.next_seed(), seq2.next_seed());
        }
    }

    #[test]
    fn test_take_seeds_matches_sequential_draws() {
        let mut batch = SeedSequence::new(7);
        let mut one_by_one = SeedSequence::new(7);

        let seeds = batch.take_seeds(50);
        let expected: Vec<u64> = (0..50).map(|_| one_by_one.next_seed()).collect();

        assert_eq!(seeds, expected);
        // Both streams are now at the same position
        assert_eq!(batch.next_seed(), one_by_one.next_seed());
    }

    #[test]
    fn test_seeds_fit_in_u32() {
        let mut seq = SeedSequence::new(123);
        assert!(seq.take_seeds(1_000).iter().all(|&s| s <= u64::from(u32::MAX)));
    }

    #[test]
    fn test_different_root_seeds_differ() {
        let a = SeedSequence::new(1).take_seeds(10);
        let b = SeedSequence::new(2).take_seeds(10);
        assert_ne!(a, b);
    }

    #[test]
    fn test_normal_distribution() {
        let mut rng = path_rng(42);

        let samples: Vec<f64> = (0..10000).map(|_| get_normal_draw(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.05, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.05,
            "Variance should be close to 1, got {}",
            variance
        );
    }
}
