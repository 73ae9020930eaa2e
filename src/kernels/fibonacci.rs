//! Linear Fibonacci sequence generation.
//!
//! ## Width and overflow
//!
//! Terms are `u64`. F(93) is the largest term that fits, so sequences of up
//! to [`MAX_FIBONACCI_LENGTH`] (94) terms succeed. Longer requests fail with
//! `ArithmeticOverflow` before any term is generated; terms never wrap.

use crate::error::{BenchError, Result};
use crate::kernels::{reject, Kernel};
use crate::types::params::MAX_FIBONACCI_LENGTH;
use crate::types::{FibonacciParams, KernelKind, KernelOutput};

/// The first `n` Fibonacci numbers: 0, 1, 1, 2, 3, 5, ...
///
/// # Errors
///
/// `ArithmeticOverflow` if `n > 94`; the error names the first term index
/// that does not fit in `u64`.
///
/// # Example
///
/// ```
/// use kernel_bench::kernels::fibonacci_sequence;
///
/// assert_eq!(fibonacci_sequence(7).unwrap(), vec![0, 1, 1, 2, 3, 5, 8]);
/// assert!(fibonacci_sequence(95).is_err());
/// ```
pub fn fibonacci_sequence(n: u32) -> Result<Vec<u64>> {
    FibonacciParams { length: n }.terms()
}

impl FibonacciParams {
    /// Generate the sequence this record describes.
    pub fn terms(&self) -> Result<Vec<u64>> {
        self.validate()
            .map_err(|e| reject(KernelKind::Fibonacci, e))?;
        tracing::debug!(length = self.length, "fibonacci sequence");

        if self.length > MAX_FIBONACCI_LENGTH {
            return Err(reject(
                KernelKind::Fibonacci,
                BenchError::ArithmeticOverflow {
                    kernel: "fibonacci",
                    at: MAX_FIBONACCI_LENGTH as usize,
                },
            ));
        }

        let n = self.length as usize;
        let mut fib = Vec::with_capacity(n);
        let (mut prev, mut curr) = (0u64, 1u64);

        for index in 0..n {
            fib.push(prev);
            let next = prev
                .checked_add(curr)
                .ok_or(BenchError::ArithmeticOverflow {
                    kernel: "fibonacci",
                    at: index + 2,
                });
            prev = curr;
            // The lookahead term may overflow one step before the sequence
            // ends; it is only an error if we would actually emit it.
            curr = match next {
                Ok(value) => value,
                Err(err) if index + 2 < n => return Err(err),
                Err(_) => 0,
            };
        }

        Ok(fib)
    }
}

impl Kernel for FibonacciParams {
    const KIND: KernelKind = KernelKind::Fibonacci;

    fn run(&self) -> Result<KernelOutput> {
        self.terms().map(KernelOutput::Terms)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_terms() {
        assert_eq!(fibonacci_sequence(0).unwrap(), Vec::<u64>::new());
        assert_eq!(fibonacci_sequence(1).unwrap(), vec![0]);
        assert_eq!(fibonacci_sequence(2).unwrap(), vec![0, 1]);
        assert_eq!(fibonacci_sequence(7).unwrap(), vec![0, 1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_recurrence_holds() {
        let fib = fibonacci_sequence(60).unwrap();
        assert_eq!(fib.len(), 60);
        for w in fib.windows(3) {
            assert_eq!(w[2], w[0] + w[1]);
        }
    }

    #[test]
    fn test_last_representable_length() {
        let fib = fibonacci_sequence(MAX_FIBONACCI_LENGTH).unwrap();
        assert_eq!(fib.len(), 94);
        assert_eq!(fib[93], 12_200_160_415_121_876_738);
        assert_eq!(fib[92], 7_540_113_804_746_346_429);
    }

    #[test]
    fn test_overflow_boundary() {
        let err = fibonacci_sequence(MAX_FIBONACCI_LENGTH + 1).unwrap_err();
        assert_eq!(
            err,
            BenchError::ArithmeticOverflow {
                kernel: "fibonacci",
                at: 94
            }
        );
        assert!(fibonacci_sequence(u32::MAX).is_err());
    }

    #[test]
    fn test_f94_really_overflows() {
        let fib = fibonacci_sequence(94).unwrap();
        assert!(fib[92].checked_add(fib[93]).is_none());
    }
}
