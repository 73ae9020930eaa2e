//! Error taxonomy for kernels, marshaling and suite configuration.
//!
//! ## Categories
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`BenchError::InvalidParameter`] | parameter validation, before any computation |
//! | [`BenchError::ShapeMismatch`] | matrix multiply, buffer length vs. declared shape |
//! | [`BenchError::Conversion`] | marshaling a host value into a fixed-width type |
//! | [`BenchError::ComparatorFault`] | native comparators that fail during a sort |
//! | [`BenchError::ArithmeticOverflow`] | Fibonacci terms past the `u64` boundary |
//! | [`BenchError::Config`] | suite configuration loading |
//!
//! Kernels never substitute a default value for a failure. The sort engine
//! does not use this type for comparator failures from a host: those are
//! returned as the comparator's own error type, untouched.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors produced by the kernel library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    /// An argument is out of range or meaningless for the kernel.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the public signature
        name: &'static str,
        /// Human-readable constraint that was violated
        reason: String,
    },

    /// A matrix buffer does not hold `rows * cols` values.
    #[error("matrix {operand} has {actual} values, shape requires {expected}")]
    ShapeMismatch {
        /// Which operand ("a" or "b")
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A host value cannot be represented in the target fixed-width type.
    #[error("cannot convert element {index}: {reason}")]
    Conversion {
        /// Position of the offending element in the input sequence
        index: usize,
        reason: String,
    },

    /// A comparator failed while the sort was running.
    #[error("comparator failed: {0}")]
    ComparatorFault(String),

    /// A sequence generator ran past its accumulator width.
    #[error("{kernel} overflows u64 at term {at}")]
    ArithmeticOverflow {
        kernel: &'static str,
        /// Zero-based index of the first term that does not fit
        at: usize,
    },

    /// Suite configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BenchError {
    /// Shorthand for [`BenchError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BenchError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`BenchError::Conversion`].
    pub fn conversion(index: usize, reason: impl Into<String>) -> Self {
        BenchError::Conversion {
            index,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Config(err.to_string())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
