//! Comparator-free fast paths for homogeneous numeric and text sequences.
//!
//! These take a direction flag instead of a comparator and order values
//! with the type's native ordering, so no comparison ever crosses back
//! into the host. Both paths are stable.
//!
//! Numbers are ordered with [`f64::total_cmp`] after every NaN is folded
//! onto the positive quiet NaN, so `-0.0` sorts before `0.0` and NaN of
//! either sign sorts after `+inf` (before it when descending). Strings are
//! ordered byte-wise, which for UTF-8 is code-point order.

use crate::types::SortDirection;

/// Sort host numbers by value.
///
/// ```
/// use kernel_bench::sort::sort_numbers;
/// use kernel_bench::types::SortDirection;
///
/// let sorted = sort_numbers(vec![3.0, -1.0, 2.5], SortDirection::Descending);
/// assert_eq!(sorted, vec![3.0, 2.5, -1.0]);
/// ```
pub fn sort_numbers(mut values: Vec<f64>, direction: SortDirection) -> Vec<f64> {
    tracing::debug!(len = values.len(), ?direction, "sorting numbers");
    values.sort_by(|a, b| direction.apply(number_key(*a).total_cmp(&number_key(*b))));
    values
}

/// `total_cmp` places a sign-bit NaN below `-inf`; fold it upwards.
#[inline]
fn number_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        value
    }
}

/// Sort strings lexicographically.
pub fn sort_strings(mut values: Vec<String>, direction: SortDirection) -> Vec<String> {
    tracing::debug!(len = values.len(), ?direction, "sorting strings");
    values.sort_by(|a, b| direction.apply(a.cmp(b)));
    values
}

/// Sort any totally ordered values in the given direction.
pub fn sort_native<T: Ord>(mut values: Vec<T>, direction: SortDirection) -> Vec<T> {
    values.sort_by(|a, b| direction.apply(a.cmp(b)));
    values
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_ascending() {
        let sorted = sort_numbers(vec![5.0, -3.5, 0.0, 12.25, 1.0], SortDirection::Ascending);
        assert_eq!(sorted, vec![-3.5, 0.0, 1.0, 5.0, 12.25]);
    }

    #[test]
    fn test_numbers_descending() {
        let sorted = sort_numbers(vec![1.0, 3.0, 2.0], SortDirection::Descending);
        assert_eq!(sorted, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_numbers_special_values() {
        let sorted = sort_numbers(
            vec![f64::NAN, 1.0, f64::NEG_INFINITY, f64::INFINITY],
            SortDirection::Ascending,
        );
        assert_eq!(sorted[0], f64::NEG_INFINITY);
        assert_eq!(sorted[1], 1.0);
        assert_eq!(sorted[2], f64::INFINITY);
        assert!(sorted[3].is_nan());
    }

    #[test]
    fn test_numbers_negative_nan_sorts_last() {
        let sorted = sort_numbers(
            vec![1.0, f64::INFINITY, -f64::NAN, -5.0, f64::NAN],
            SortDirection::Ascending,
        );
        assert_eq!(&sorted[..3], &[-5.0, 1.0, f64::INFINITY]);
        assert!(sorted[3].is_nan() && sorted[3].is_sign_negative());
        assert!(sorted[4].is_nan() && sorted[4].is_sign_positive());

        let sorted = sort_numbers(
            vec![f64::NEG_INFINITY, -f64::NAN, 2.0],
            SortDirection::Descending,
        );
        assert!(sorted[0].is_nan());
        assert_eq!(&sorted[1..], &[2.0, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_numbers_empty() {
        assert!(sort_numbers(Vec::new(), SortDirection::Ascending).is_empty());
    }

    #[test]
    fn test_strings_both_directions() {
        let input: Vec<String> = ["pear", "Apple", "banana", "apple"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            sort_strings(input.clone(), SortDirection::Ascending),
            vec!["Apple", "apple", "banana", "pear"]
        );
        assert_eq!(
            sort_strings(input, SortDirection::Descending),
            vec!["pear", "banana", "apple", "Apple"]
        );
    }

    #[test]
    fn test_strings_unicode() {
        let input = vec!["é".to_string(), "z".to_string(), "a".to_string()];
        assert_eq!(sort_strings(input, SortDirection::Ascending), vec!["a", "z", "é"]);
    }

    #[test]
    fn test_native_descending() {
        assert_eq!(
            sort_native(vec![2u32, 9, 4], SortDirection::Descending),
            vec![9, 4, 2]
        );
    }
}
