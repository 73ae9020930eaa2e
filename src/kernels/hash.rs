//! Iterated multiply-xor-shift mixing hash.
//!
//! A CPU workload, not a security primitive. Each input byte is folded in
//! with a multiply-by-31 step, then the accumulator is scrambled with the
//! murmur3 finalizer constants. The whole text is folded `iterations`
//! times into the same accumulator.

use crate::error::Result;
use crate::kernels::Kernel;
use crate::types::{HashParams, KernelKind, KernelOutput};

/// Multiplier for the per-byte fold
const FOLD_MULTIPLIER: u32 = 31;
/// First mixing constant
const MIX_1: u32 = 0x85eb_ca6b;
/// Second mixing constant
const MIX_2: u32 = 0xc2b2_ae35;

/// Fold one byte into the accumulator.
#[inline(always)]
fn mix(hash: u32, byte: u8) -> u32 {
    let mut h = hash.wrapping_mul(FOLD_MULTIPLIER).wrapping_add(byte as u32);
    h ^= h >> 16;
    h = h.wrapping_mul(MIX_1);
    h ^= h >> 13;
    h = h.wrapping_mul(MIX_2);
    h ^= h >> 16;
    h
}

/// Hash the UTF-8 bytes of `data`, repeated `iterations` times.
///
/// Deterministic: the same text and count always produce the same value.
/// Zero iterations, or empty text, return the initial accumulator 0.
///
/// ```
/// use kernel_bench::kernels::hash_computation;
///
/// let a = hash_computation("benchmark", 1_000);
/// assert_eq!(a, hash_computation("benchmark", 1_000));
/// assert_ne!(a, hash_computation("benchmark", 1_001));
/// ```
pub fn hash_computation(data: &str, iterations: u32) -> u32 {
    tracing::debug!(len = data.len(), iterations, "hash computation");
    let bytes = data.as_bytes();
    let mut hash = 0u32;

    for _ in 0..iterations {
        for &byte in bytes {
            hash = mix(hash, byte);
        }
    }

    hash
}

impl Kernel for HashParams {
    const KIND: KernelKind = KernelKind::Hash;

    fn run(&self) -> Result<KernelOutput> {
        self.validate()?;
        Ok(KernelOutput::Digest(hash_computation(&self.data, self.iterations)))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
