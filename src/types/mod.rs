//! Core data types for the kernel benchmark
//!
//! ## Types
//!
//! - [`SortDirection`]: ascending / descending flag for the sort fast paths
//! - [`KernelKind`]: the catalogue of benchmark workloads
//! - [`Strategy`]: native (this crate) or scripted (host) implementation
//! - [`KernelOutput`]: typed result buffer of one kernel run
//! - [`Matrix`]: row-major `f64` matrix with a checked shape
//! - [`params`]: per-kernel parameter records and [`SuiteConfig`]
//! - [`RunReceipt`]: timing and fingerprint of one run
//!
//! Enum-like types carry `to_u8` / `from_u8` for compact wire encoding and
//! derive serde for the JSON suite configuration.

mod direction;
mod kind;
mod matrix;
mod receipt;
pub mod params;

// Re-export all types at module level
pub use direction::SortDirection;
pub use kind::{KernelKind, KernelOutput, Strategy};
pub use matrix::Matrix;
pub use params::{
    FibonacciParams, HashParams, MandelbrotParams, MatrixParams, MonteCarloParams, SieveParams,
    SuiteConfig,
};
pub use receipt::RunReceipt;
