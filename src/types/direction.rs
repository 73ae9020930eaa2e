//! Sort direction for the comparator-free fast paths.
//!
//! The host passes a boolean `ascending` flag; inside the crate the flag is
//! carried as a [`SortDirection`] so call sites read as intent rather than
//! as a bare `bool`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

// ============================================================================
// SortDirection enum
// ============================================================================

/// Direction of a native-ordering sort.
///
/// Represented as u8 on the wire:
/// - Ascending = 0
/// - Descending = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// Build from the host's `ascending` flag
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            SortDirection::Ascending => 0,
            SortDirection::Descending => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(SortDirection::Ascending),
            1 => Some(SortDirection::Descending),
            _ => None,
        }
    }

    /// Returns the opposite direction
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient a natural-order comparison result.
    #[inline]
    pub fn apply(self, natural: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => natural,
            SortDirection::Descending => natural.reverse(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
