//! Kernel identifiers, execution strategies and typed kernel outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// KernelKind enum
// ============================================================================

/// The fixed catalogue of benchmark workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    MonteCarloPi,
    Mandelbrot,
    PrimeSieve,
    MatrixMultiply,
    Fibonacci,
    Hash,
    /// Comparator-driven generic sort
    Sort,
}

impl KernelKind {
    /// Every kernel, in catalogue order
    pub const ALL: [KernelKind; 7] = [
        KernelKind::MonteCarloPi,
        KernelKind::Mandelbrot,
        KernelKind::PrimeSieve,
        KernelKind::MatrixMultiply,
        KernelKind::Fibonacci,
        KernelKind::Hash,
        KernelKind::Sort,
    ];

    /// Stable short name used in logs and receipts
    pub fn name(self) -> &'static str {
        match self {
            KernelKind::MonteCarloPi => "monte_carlo_pi",
            KernelKind::Mandelbrot => "mandelbrot",
            KernelKind::PrimeSieve => "prime_sieve",
            KernelKind::MatrixMultiply => "matrix_multiply",
            KernelKind::Fibonacci => "fibonacci",
            KernelKind::Hash => "hash",
            KernelKind::Sort => "sort",
        }
    }

    /// Parse the short name produced by [`KernelKind::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Strategy enum
// ============================================================================

/// Which execution strategy produced a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Natively compiled module (this crate)
    #[default]
    Native,
    /// Dynamically optimized scripting engine
    Scripted,
}

impl Strategy {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Strategy::Native => 0,
            Strategy::Scripted => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Strategy::Native),
            1 => Some(Strategy::Scripted),
            _ => None,
        }
    }
}

// ============================================================================
// KernelOutput enum
// ============================================================================

/// Result of one kernel invocation, typed by the kernel's output buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelOutput {
    /// Monte Carlo π estimate
    Estimate(f64),
    /// Mandelbrot iteration counts, row-major
    Counts(Vec<u32>),
    /// Sieve output
    Primes(Vec<u32>),
    /// Flattened matrix product
    Matrix(Vec<f64>),
    /// Fibonacci terms
    Terms(Vec<u64>),
    /// Mixing hash value
    Digest(u32),
}

impl KernelOutput {
    /// Number of values in the output buffer (1 for scalar outputs)
    pub fn len(&self) -> usize {
        match self {
            KernelOutput::Estimate(_) | KernelOutput::Digest(_) => 1,
            KernelOutput::Counts(v) | KernelOutput::Primes(v) => v.len(),
            KernelOutput::Matrix(v) => v.len(),
            KernelOutput::Terms(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Little-endian byte image of the output, used for fingerprinting.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            KernelOutput::Estimate(v) => v.to_le_bytes().to_vec(),
            KernelOutput::Digest(v) => v.to_le_bytes().to_vec(),
            KernelOutput::Counts(v) | KernelOutput::Primes(v) => {
                v.iter().flat_map(|x| x.to_le_bytes()).collect()
            }
            KernelOutput::Matrix(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
            KernelOutput::Terms(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_roundtrip() {
        for kind in KernelKind::ALL {
            assert_eq!(KernelKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(KernelKind::from_name("bogus"), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(KernelKind::PrimeSieve.to_string(), "prime_sieve");
    }

    #[test]
    fn test_strategy_conversion() {
        assert_eq!(Strategy::Native.to_u8(), 0);
        assert_eq!(Strategy::Scripted.to_u8(), 1);
        assert_eq!(Strategy::from_u8(1), Some(Strategy::Scripted));
        assert_eq!(Strategy::from_u8(9), None);
    }

    #[test]
    fn test_output_len() {
        assert_eq!(KernelOutput::Estimate(2.5).len(), 1);
        assert_eq!(KernelOutput::Primes(vec![2, 3, 5]).len(), 3);
        assert!(KernelOutput::Terms(vec![]).is_empty());
    }

    #[test]
    fn test_output_bytes() {
        assert_eq!(KernelOutput::Digest(1).to_le_bytes(), vec![1, 0, 0, 0]);
        assert_eq!(KernelOutput::Counts(vec![1, 2]).to_le_bytes().len(), 8);
        assert_eq!(KernelOutput::Terms(vec![0, 1, 1]).to_le_bytes().len(), 24);
    }
}
