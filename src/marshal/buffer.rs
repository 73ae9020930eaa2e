//! Conversions between host values and fixed-width numeric buffers.
//!
//! ## Rules
//!
//! | Target | Accepts | Rejects |
//! |--------|---------|---------|
//! | `u32` | integral numbers / bigints in `0..=u32::MAX` | fractions, negatives, NaN, out of range |
//! | `u64` | integral numbers in `0..=2^53-1`, bigints in `0..=u64::MAX` | unsafe-integer numbers, fractions, negatives |
//! | `f64` | any number; bigints of magnitude `<= 2^53-1` | bigints that would round |
//! | `String` | strings | everything else |
//!
//! Anything else is a `Conversion` error naming the element index. Nothing
//! is truncated, rounded, or skipped, so every conversion that succeeds
//! round-trips exactly.
//!
//! ## Example
//!
//! ```
//! use kernel_bench::marshal::{from_u32_buffer, to_u32_buffer, HostValue};
//!
//! let host = vec![HostValue::Number(2.0), HostValue::Number(3.0)];
//! let buffer = to_u32_buffer(&host).unwrap();
//! assert_eq!(buffer, vec![2, 3]);
//! assert_eq!(from_u32_buffer(&buffer), host);
//!
//! assert!(to_u32_buffer(&[HostValue::Number(-1.0)]).is_err());
//! ```

use crate::error::{BenchError, Result};
use crate::marshal::value::{HostValue, MAX_SAFE_INTEGER};

// ============================================================================
// Element conversions
// ============================================================================

/// Convert one host value to `u32`.
pub fn to_u32(value: &HostValue, index: usize) -> Result<u32> {
    match value {
        HostValue::Number(n) => {
            let n = integral(*n, index)?;
            if n < 0.0 || n > u32::MAX as f64 {
                return Err(BenchError::conversion(index, format!("{n} is outside u32 range")));
            }
            Ok(n as u32)
        }
        HostValue::BigInt(n) => u32::try_from(*n)
            .map_err(|_| BenchError::conversion(index, format!("{n}n is outside u32 range"))),
        other => Err(type_error(other, "u32", index)),
    }
}

/// Convert one host value to `u64`.
pub fn to_u64(value: &HostValue, index: usize) -> Result<u64> {
    match value {
        HostValue::Number(n) => {
            let n = integral(*n, index)?;
            if n < 0.0 {
                return Err(BenchError::conversion(index, format!("{n} is negative")));
            }
            if n > MAX_SAFE_INTEGER {
                return Err(BenchError::conversion(
                    index,
                    format!("{n} is above 2^53-1 and may already be rounded; pass a bigint"),
                ));
            }
            Ok(n as u64)
        }
        HostValue::BigInt(n) => u64::try_from(*n)
            .map_err(|_| BenchError::conversion(index, format!("{n}n is outside u64 range"))),
        other => Err(type_error(other, "u64", index)),
    }
}

/// Convert one host value to `f64`.
pub fn to_f64(value: &HostValue, index: usize) -> Result<f64> {
    match value {
        HostValue::Number(n) => Ok(*n),
        HostValue::BigInt(n) => {
            let as_float = *n as f64;
            if as_float.abs() > MAX_SAFE_INTEGER {
                return Err(BenchError::conversion(
                    index,
                    format!("{n}n is not exactly representable as f64"),
                ));
            }
            Ok(as_float)
        }
        other => Err(type_error(other, "f64", index)),
    }
}

fn integral(n: f64, index: usize) -> Result<f64> {
    if !n.is_finite() {
        return Err(BenchError::conversion(index, format!("{n} is not finite")));
    }
    if n.fract() != 0.0 {
        return Err(BenchError::conversion(index, format!("{n} is not an integer")));
    }
    Ok(n)
}

fn type_error(value: &HostValue, target: &str, index: usize) -> BenchError {
    BenchError::conversion(
        index,
        format!("expected a number for {target}, found {}", value.type_name()),
    )
}

// ============================================================================
// Buffer conversions
// ============================================================================

/// Host sequence -> `u32` buffer
pub fn to_u32_buffer(values: &[HostValue]) -> Result<Vec<u32>> {
    values.iter().enumerate().map(|(i, v)| to_u32(v, i)).collect()
}

/// Host sequence -> `u64` buffer
pub fn to_u64_buffer(values: &[HostValue]) -> Result<Vec<u64>> {
    values.iter().enumerate().map(|(i, v)| to_u64(v, i)).collect()
}

/// Host sequence -> `f64` buffer
pub fn to_f64_buffer(values: &[HostValue]) -> Result<Vec<f64>> {
    values.iter().enumerate().map(|(i, v)| to_f64(v, i)).collect()
}

/// Host sequence -> owned strings
pub fn to_string_vec(values: &[HostValue]) -> Result<Vec<String>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            HostValue::String(s) => Ok(s.clone()),
            other => Err(BenchError::conversion(
                i,
                format!("expected a string, found {}", other.type_name()),
            )),
        })
        .collect()
}

/// `u32` buffer -> host numbers
pub fn from_u32_buffer(values: &[u32]) -> Vec<HostValue> {
    values.iter().map(|&v| HostValue::Number(v as f64)).collect()
}

/// `u64` buffer -> host bigints (a `u64` does not fit a host number in general)
pub fn from_u64_buffer(values: &[u64]) -> Vec<HostValue> {
    values.iter().map(|&v| HostValue::BigInt(v as i128)).collect()
}

/// `f64` buffer -> host numbers
pub fn from_f64_buffer(values: &[f64]) -> Vec<HostValue> {
    values.iter().map(|&v| HostValue::Number(v)).collect()
}

/// Strings -> host strings
pub fn from_strings(values: Vec<String>) -> Vec<HostValue> {
    values.into_iter().map(HostValue::String).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_accepts_range_edges() {
        assert_eq!(to_u32(&HostValue::Number(0.0), 0).unwrap(), 0);
        assert_eq!(to_u32(&HostValue::Number(u32::MAX as f64), 0).unwrap(), u32::MAX);
        assert_eq!(to_u32(&HostValue::BigInt(7), 0).unwrap(), 7);
    }

    #[test]
    fn test_u32_rejects() {
        for bad in [
            HostValue::Number(-1.0),
            HostValue::Number(u32::MAX as f64 + 1.0),
            HostValue::Number(1.5),
            HostValue::Number(f64::NAN),
            HostValue::Number(f64::INFINITY),
            HostValue::BigInt(-3),
            HostValue::from("3"),
            HostValue::Null,
        ] {
            assert!(to_u32(&bad, 0).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_conversion_error_names_index() {
        let values = vec![HostValue::Number(1.0), HostValue::Number(2.0), HostValue::Number(0.5)];
        let err = to_u32_buffer(&values).unwrap_err();
        assert!(matches!(err, BenchError::Conversion { index: 2, .. }));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(to_u32(&HostValue::Number(-0.0), 0).unwrap(), 0);
    }

    #[test]
    fn test_u64_safe_integer_boundary() {
        assert_eq!(
            to_u64(&HostValue::Number(MAX_SAFE_INTEGER), 0).unwrap(),
            9_007_199_254_740_991
        );
        assert!(to_u64(&HostValue::Number(MAX_SAFE_INTEGER + 1.0), 0).is_err());
        assert_eq!(
            to_u64(&HostValue::BigInt(u64::MAX as i128), 0).unwrap(),
            u64::MAX
        );
        assert!(to_u64(&HostValue::BigInt(u64::MAX as i128 + 1), 0).is_err());
    }

    #[test]
    fn test_u64_roundtrip_via_bigint() {
        let values = vec![0u64, 1, 12_200_160_415_121_876_738, u64::MAX];
        let host = from_u64_buffer(&values);
        assert_eq!(to_u64_buffer(&host).unwrap(), values);
    }

    #[test]
    fn test_f64_roundtrip_exact() {
        let values = vec![0.1, -0.0, 1e308, f64::MIN_POSITIVE, -123.456];
        let back = to_f64_buffer(&from_f64_buffer(&values)).unwrap();
        for (a, b) in values.iter().zip(&back) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_f64_from_bigint() {
        assert_eq!(to_f64(&HostValue::BigInt(-42), 0).unwrap(), -42.0);
        assert!(to_f64(&HostValue::BigInt(1i128 << 60), 0).is_err());
    }

    #[test]
    fn test_strings() {
        let host = from_strings(vec!["a".into(), "b".into()]);
        assert_eq!(to_string_vec(&host).unwrap(), vec!["a", "b"]);
        let mixed = vec![HostValue::from("a"), HostValue::Number(1.0)];
        assert!(matches!(
            to_string_vec(&mixed),
            Err(BenchError::Conversion { index: 1, .. })
        ));
    }
}
