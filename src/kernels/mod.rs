//! Numeric benchmark kernels.
//!
//! ## Design Principles
//!
//! Every kernel is:
//!
//! 1. **Pure**: output depends only on the arguments (Monte Carlo's
//!    randomness comes from an explicit seed)
//! 2. **Validated up front**: bad parameters fail before any work is done
//! 3. **Synchronous**: runs to completion, no yielding, no cancellation
//! 4. **Faithful to the scripted twin**: same loop order and the same
//!    floating-point operation sequence, so both strategies produce
//!    bit-identical buffers for the same input
//!
//! ## Catalogue
//!
//! | Kernel | Function | Output |
//! |--------|----------|--------|
//! | Monte Carlo π | [`monte_carlo_pi`] | `f64` |
//! | Mandelbrot field | [`mandelbrot_set`] | `Vec<u32>`, `width * height` |
//! | Prime sieve | [`prime_sieve`] | `Vec<u32>`, primes `<= limit` |
//! | Matrix multiply | [`matrix_multiply`] | `Vec<f64>`, `rows_a * cols_b` |
//! | Fibonacci | [`fibonacci_sequence`] | `Vec<u64>`, `n` terms |
//! | Mixing hash | [`hash_computation`] | `u32` |
//!
//! ## Example
//!
//! ```
//! use kernel_bench::kernels::{fibonacci_sequence, prime_sieve};
//!
//! assert_eq!(prime_sieve(10).unwrap(), vec![2, 3, 5, 7]);
//! assert_eq!(fibonacci_sequence(7).unwrap(), vec![0, 1, 1, 2, 3, 5, 8]);
//! ```

pub mod fibonacci;
pub mod hash;
pub mod mandelbrot;
pub mod matrix;
pub mod monte_carlo;
pub mod sieve;

pub use fibonacci::fibonacci_sequence;
pub use hash::hash_computation;
pub use mandelbrot::{mandelbrot_iterations, mandelbrot_set};
pub use matrix::matrix_multiply;
pub use monte_carlo::{monte_carlo_pi, monte_carlo_pi_seeded};
pub use sieve::prime_sieve;

use crate::error::{BenchError, Result};
use crate::types::{KernelKind, KernelOutput};

/// A parameter record that knows how to run its kernel.
///
/// Implemented by each record in [`crate::types::params`], so a harness can
/// drive the whole catalogue uniformly.
pub trait Kernel {
    /// Which kernel the record configures
    const KIND: KernelKind;

    /// Validate the record and run the kernel once.
    fn run(&self) -> Result<KernelOutput>;
}

/// Log a rejected parameter set and hand the error back.
pub(crate) fn reject(kind: KernelKind, err: BenchError) -> BenchError {
    tracing::warn!(kernel = %kind, error = %err, "kernel rejected its parameters");
    err
}
