//! Monte Carlo estimation of π.
//!
//! Draw points uniformly in the square [-1, 1] x [-1, 1]; the fraction that
//! lands inside the unit circle approaches π/4.
//!
//! Randomness comes from a ChaCha8 stream seeded by the caller, so an
//! estimate is reproducible for a given `(iterations, seed)` pair.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::kernels::{reject, Kernel};
use crate::types::params::DEFAULT_SEED;
use crate::types::{KernelKind, KernelOutput, MonteCarloParams};

/// Trials between progress events
const PROGRESS_INTERVAL: u32 = 1_000_000;

/// Estimate π from `iterations` trials using the default seed.
///
/// # Errors
///
/// `InvalidParameter` if `iterations` is zero.
///
/// # Example
///
/// ```
/// use kernel_bench::kernels::monte_carlo_pi;
///
/// let pi = monte_carlo_pi(200_000).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 0.05);
/// ```
pub fn monte_carlo_pi(iterations: u32) -> Result<f64> {
    monte_carlo_pi_seeded(iterations, DEFAULT_SEED)
}

/// Estimate π from `iterations` trials drawn from a generator seeded with `seed`.
pub fn monte_carlo_pi_seeded(iterations: u32, seed: u64) -> Result<f64> {
    MonteCarloParams { iterations, seed }.run_estimate()
}

impl MonteCarloParams {
    fn run_estimate(&self) -> Result<f64> {
        self.validate()
            .map_err(|e| reject(KernelKind::MonteCarloPi, e))?;
        tracing::debug!(iterations = self.iterations, seed = self.seed, "monte carlo pi");

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut inside_circle: u64 = 0;

        for i in 0..self.iterations {
            let x: f64 = rng.gen_range(-1.0..=1.0);
            let y: f64 = rng.gen_range(-1.0..=1.0);

            if x * x + y * y <= 1.0 {
                inside_circle += 1;
            }

            if i > 0 && i % PROGRESS_INTERVAL == 0 {
                tracing::trace!(
                    trials = i + 1,
                    partial = 4.0 * inside_circle as f64 / (i as f64 + 1.0),
                    "monte carlo progress"
                );
            }
        }

        Ok(4.0 * inside_circle as f64 / self.iterations as f64)
    }
}

impl Kernel for MonteCarloParams {
    const KIND: KernelKind = KernelKind::MonteCarloPi;

    fn run(&self) -> Result<KernelOutput> {
        self.run_estimate().map(KernelOutput::Estimate)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(matches!(
            monte_carlo_pi(0),
            Err(BenchError::InvalidParameter { name: "iterations", .. })
        ));
    }

    #[test]
    fn test_single_trial_is_zero_or_four() {
        let estimate = monte_carlo_pi(1).unwrap();
        assert!(estimate == 0.0 || estimate == 4.0);
    }

    #[test]
    fn test_estimate_in_range() {
        let estimate = monte_carlo_pi(1_000).unwrap();
        assert!((0.0..=4.0).contains(&estimate));
    }

    #[test]
    fn test_same_seed_same_estimate() {
        let a = monte_carlo_pi_seeded(10_000, 7).unwrap();
        let b = monte_carlo_pi_seeded(10_000, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = monte_carlo_pi_seeded(10_000, 1).unwrap();
        let b = monte_carlo_pi_seeded(10_000, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_converges() {
        let estimate = monte_carlo_pi(1_000_000).unwrap();
        assert!((estimate - PI).abs() < 0.05, "estimate {}", estimate);
    }

    #[test]
    fn test_kernel_trait() {
        let params = MonteCarloParams {
            iterations: 500,
            seed: 3,
        };
        assert_eq!(
            params.run().unwrap(),
            KernelOutput::Estimate(monte_carlo_pi_seeded(500, 3).unwrap())
        );
    }
}
