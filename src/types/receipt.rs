//! Run receipt: the record one timed kernel invocation leaves behind.
//!
//! Timing happens at the call site; the receipt only carries the measured
//! duration next to a fingerprint of what was computed, so two strategies
//! can be compared both for speed and for agreement.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::{KernelKind, KernelOutput, Strategy};

/// Summary of one kernel run.
///
/// ## Fingerprint
///
/// The 32-byte fingerprint is a SHA-256 hash of the output buffer's
/// little-endian byte image. Two runs that agree value-for-value have equal
/// fingerprints regardless of which strategy produced them.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use kernel_bench::types::{KernelKind, KernelOutput, RunReceipt, Strategy};
///
/// let output = KernelOutput::Primes(vec![2, 3, 5, 7]);
/// let native = RunReceipt::with_computed_fingerprint(
///     KernelKind::PrimeSieve,
///     Strategy::Native,
///     &output,
///     Duration::from_micros(40),
/// );
/// let scripted = RunReceipt::with_computed_fingerprint(
///     KernelKind::PrimeSieve,
///     Strategy::Scripted,
///     &output,
///     Duration::from_micros(100),
/// );
///
/// assert!(native.matches(&scripted));
/// assert_eq!(native.speedup_over(&scripted), Some(2.5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReceipt {
    pub kernel: KernelKind,

    pub strategy: Strategy,

    /// Number of values in the output buffer
    pub output_len: u64,

    /// Wall-clock duration measured by the caller, in microseconds
    pub elapsed_micros: u64,

    /// SHA-256 of the output bytes
    pub fingerprint: [u8; 32],
}

impl RunReceipt {
    /// Create a new receipt
    pub fn new(
        kernel: KernelKind,
        strategy: Strategy,
        output_len: u64,
        elapsed_micros: u64,
        fingerprint: [u8; 32],
    ) -> Self {
        Self {
            kernel,
            strategy,
            output_len,
            elapsed_micros,
            fingerprint,
        }
    }

    /// Create a receipt whose fingerprint is computed from `output`
    pub fn with_computed_fingerprint(
        kernel: KernelKind,
        strategy: Strategy,
        output: &KernelOutput,
        elapsed: Duration,
    ) -> Self {
        let fingerprint = Self::compute_hash(&output.to_le_bytes());
        let elapsed_micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        Self::new(
            kernel,
            strategy,
            output.len() as u64,
            elapsed_micros,
            fingerprint,
        )
    }

    /// Compute SHA-256 hash of the given data
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Get the fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// True when both receipts describe the same kernel and identical output
    pub fn matches(&self, other: &RunReceipt) -> bool {
        self.kernel == other.kernel
            && self.output_len == other.output_len
            && self.fingerprint == other.fingerprint
    }

    /// How many times faster this run was than `other`.
    ///
    /// Returns None if this run's duration is zero (too fast to measure).
    pub fn speedup_over(&self, other: &RunReceipt) -> Option<f64> {
        if self.elapsed_micros == 0 {
            None
        } else {
            Some(other.elapsed_micros as f64 / self.elapsed_micros as f64)
        }
    }

    /// Check if the run produced no values
    pub fn is_empty(&self) -> bool {
        self.output_len == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
