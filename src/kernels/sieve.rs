//! Sieve of Eratosthenes.

use crate::error::Result;
use crate::kernels::{reject, Kernel};
use crate::types::{KernelKind, KernelOutput, SieveParams};

/// All primes `<= limit`, ascending.
///
/// Limits below 2 yield an empty sequence.
///
/// # Errors
///
/// `InvalidParameter` if the `limit + 1` flag table cannot be indexed on
/// this platform (only possible on 32-bit targets with `limit == u32::MAX`).
///
/// # Example
///
/// ```
/// use kernel_bench::kernels::prime_sieve;
///
/// assert_eq!(prime_sieve(10).unwrap(), vec![2, 3, 5, 7]);
/// assert!(prime_sieve(1).unwrap().is_empty());
/// ```
pub fn prime_sieve(limit: u32) -> Result<Vec<u32>> {
    SieveParams { limit }.primes()
}

impl SieveParams {
    /// Run the sieve this record describes.
    pub fn primes(&self) -> Result<Vec<u32>> {
        self.validate()
            .map_err(|e| reject(KernelKind::PrimeSieve, e))?;
        tracing::debug!(limit = self.limit, "prime sieve");

        if self.limit < 2 {
            return Ok(Vec::new());
        }

        let n = self.limit as usize;
        let mut is_prime = vec![true; n + 1];
        is_prime[0] = false;
        is_prime[1] = false;

        // i <= n / i avoids computing i * i past usize on 32-bit targets
        let mut i = 2usize;
        while i <= n / i {
            if is_prime[i] {
                for j in (i * i..=n).step_by(i) {
                    is_prime[j] = false;
                }
            }
            i += 1;
        }

        Ok(is_prime
            .iter()
            .enumerate()
            .filter(|&(_, &prime)| prime)
            .map(|(value, _)| value as u32)
            .collect())
    }
}

impl Kernel for SieveParams {
    const KIND: KernelKind = KernelKind::PrimeSieve;

    fn run(&self) -> Result<KernelOutput> {
        self.primes().map(KernelOutput::Primes)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime_trial(n: u32) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn test_small_limits() {
        assert_eq!(prime_sieve(0).unwrap(), Vec::<u32>::new());
        assert_eq!(prime_sieve(1).unwrap(), Vec::<u32>::new());
        assert_eq!(prime_sieve(2).unwrap(), vec![2]);
        assert_eq!(prime_sieve(3).unwrap(), vec![2, 3]);
        assert_eq!(prime_sieve(10).unwrap(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(prime_sieve(13).unwrap().last(), Some(&13));
        assert_eq!(prime_sieve(12).unwrap().last(), Some(&11));
    }

    #[test]
    fn test_perfect_square_limit() {
        // 49 = 7^2 must be struck out
        let primes = prime_sieve(49).unwrap();
        assert!(!primes.contains(&49));
        assert_eq!(primes.last(), Some(&47));
    }

    #[test]
    fn test_matches_trial_division() {
        let primes = prime_sieve(2_000).unwrap();
        let expected: Vec<u32> = (0..=2_000).filter(|&n| is_prime_trial(n)).collect();
        assert_eq!(primes, expected);
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(prime_sieve(100).unwrap().len(), 25);
        assert_eq!(prime_sieve(1_000).unwrap().len(), 168);
        assert_eq!(prime_sieve(1_000_000).unwrap().len(), 78_498);
    }

    #[test]
    fn test_strictly_ascending() {
        let primes = prime_sieve(10_000).unwrap();
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }
}
