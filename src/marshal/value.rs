//! Dynamic host value model.
//!
//! A scripting host hands over loosely typed values. [`HostValue`] is the
//! crate-side picture of one: the marshaling functions in
//! [`crate::marshal::buffer`] convert sequences of them into the kernels'
//! fixed-width buffers and back.

use std::cmp::Ordering;
use std::fmt;

use crate::sort::sign_to_ordering;

/// Largest integer a host `number` (IEEE-754 double) represents exactly: 2^53 - 1
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One dynamically typed host value.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Undefined,
    Null,
    Bool(bool),
    /// IEEE-754 double, the host's only plain numeric type
    Number(f64),
    /// Arbitrary-precision integer; `i128` covers every `u64` and `i64`
    BigInt(i128),
    String(String),
    Array(Vec<HostValue>),
    /// Anything the crate does not look inside (objects, functions, symbols)
    Object,
}

impl HostValue {
    /// Short type tag for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::BigInt(_) => "bigint",
            HostValue::String(_) => "string",
            HostValue::Array(_) => "array",
            HostValue::Object => "object",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, HostValue::Undefined | HostValue::Null)
    }

    /// Read this value as the result of a host comparator call.
    ///
    /// Numbers go by sign with NaN as Equal; `true` counts as 1 and `false`
    /// as 0. Every other value is Equal.
    pub fn comparison_order(&self) -> Ordering {
        match self {
            HostValue::Number(n) => sign_to_ordering(*n),
            HostValue::Bool(true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => f.write_str("undefined"),
            HostValue::Null => f.write_str("null"),
            HostValue::Bool(b) => write!(f, "{b}"),
            HostValue::Number(n) => write!(f, "{n}"),
            HostValue::BigInt(n) => write!(f, "{n}n"),
            HostValue::String(s) => write!(f, "{s:?}"),
            HostValue::Array(items) => write!(f, "[{} items]", items.len()),
            HostValue::Object => f.write_str("[object]"),
        }
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        HostValue::Number(v)
    }
}

impl From<u32> for HostValue {
    fn from(v: u32) -> Self {
        HostValue::Number(v as f64)
    }
}

impl From<bool> for HostValue {
    fn from(v: bool) -> Self {
        HostValue::Bool(v)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        HostValue::String(v.to_string())
    }
}

impl From<String> for HostValue {
    fn from(v: String) -> Self {
        HostValue::String(v)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(items: Vec<T>) -> Self {
        HostValue::Array(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
