//! # Kernel Bench
//!
//! Compute kernels and a generic sort engine for measuring native code
//! against the same algorithms written in a host scripting language.
//!
//! ## Architecture
//!
//! The library consists of:
//! - **Types**: parameter records, sort direction, kernel outputs, run receipts
//! - **Sort**: comparator bridge, stable merge-sort engine, fast paths
//! - **Kernels**: Monte Carlo π, Mandelbrot, prime sieve, matrix multiply,
//!   Fibonacci, mixing hash
//! - **Marshal**: host value model and fixed-width buffer conversions
//! - **Runtime**: explicit one-time initialization
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical inputs give identical outputs, including
//!    Monte Carlo (explicit seed)
//! 2. **No silent defaults**: bad parameters and failed comparators are
//!    errors, never a substituted value
//! 3. **Stateless calls**: no state survives between calls except the
//!    [`Runtime`] guard
//! 4. **Synchronous Execution**: every operation runs to completion
//!
//! ## Example
//!
//! ```
//! use kernel_bench::{prime_sieve, sort_numbers, SortDirection};
//!
//! assert_eq!(prime_sieve(30).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! assert_eq!(
//!     sort_numbers(vec![3.0, 1.0, 2.0], SortDirection::Descending),
//!     vec![3.0, 2.0, 1.0]
//! );
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy shared by every module
pub mod error;

/// Core data types: parameters, outputs, receipts
pub mod types;

/// Generic sort engine and comparator bridge
pub mod sort;

/// The numeric benchmark kernels
pub mod kernels;

/// Host value marshaling and element storage
pub mod marshal;

/// One-time initialization guard
pub mod runtime;

/// JavaScript export surface
#[cfg(feature = "wasm")]
pub mod wasm;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{BenchError, Result};
pub use kernels::{
    fibonacci_sequence, hash_computation, mandelbrot_iterations, mandelbrot_set,
    matrix_multiply, monte_carlo_pi, monte_carlo_pi_seeded, prime_sieve, Kernel,
};
pub use marshal::{ElementArena, HostValue};
pub use runtime::Runtime;
pub use sort::{sort_by, sort_numbers, sort_strings, Comparator};
pub use types::{KernelKind, KernelOutput, Matrix, RunReceipt, SortDirection, Strategy, SuiteConfig};
