//! Generic sort engine and comparator bridge.
//!
//! ## Components
//!
//! - [`Comparator`]: the ordering contract, plus adapters for closures that
//!   return [`std::cmp::Ordering`] or a signed number
//! - [`sort_by`]: stable merge sort over arbitrary elements, driven by a
//!   comparator that may fail
//! - [`sort_numbers`] / [`sort_strings`]: direction-flag fast paths that
//!   never call back into the host
//!
//! ## Cost model
//!
//! | Path | Comparisons | Boundary crossings |
//! |------|-------------|--------------------|
//! | `sort_by` | O(n log n) | one per comparison |
//! | `sort_numbers` / `sort_strings` | O(n log n) | none |
//!
//! The crossing count of `sort_by` is part of what the benchmark measures;
//! wrap the comparator in [`Counting`] to report it.
//!
//! ## Example
//!
//! ```
//! use kernel_bench::sort::{sort_by, TryBySign};
//!
//! #[derive(Debug, PartialEq)]
//! struct Row { name: &'static str, score: i64 }
//!
//! let rows = vec![
//!     Row { name: "b", score: 7 },
//!     Row { name: "a", score: 3 },
//! ];
//! let mut by_score = TryBySign(|a: &Row, b: &Row| Ok::<_, String>(a.score - b.score));
//! let sorted = sort_by(rows, &mut by_score).unwrap();
//!
//! assert_eq!(sorted[0].name, "a");
//! ```

pub mod comparator;
pub mod fast;
pub mod merge;

pub use comparator::{
    sign_to_ordering, ByOrdering, BySign, Comparator, Counting, Natural, Reversed, Sign, TryBySign,
};
pub use fast::{sort_native, sort_numbers, sort_strings};
pub use merge::{apply_permutation, is_sorted_by, sort, sort_by, sort_permutation};
