//! Generic merge sort over caller-ordered elements.
//!
//! ## Design
//!
//! The engine never moves or inspects elements while comparing. It sorts a
//! vector of handles (indices into the caller's sequence) and only after
//! every comparison has succeeded does it move each element once into its
//! final slot. A comparator fault therefore leaves nothing half-sorted
//! behind: the error is returned and the input is dropped whole.
//!
//! ## Algorithm
//!
//! Bottom-up merge sort with a ping-pong scratch buffer:
//!
//! ```text
//! width 1:  [a][b][c][d][e]   ->  [ab][cd][e]
//! width 2:  [ab][cd][e]       ->  [abcd][e]
//! width 4:  [abcd][e]         ->  [abcde]
//! ```
//!
//! - Stable: on `Equal` the left run's element is taken first
//! - O(n log n) comparisons in every case, no short-circuiting, so the
//!   comparison count depends only on the data and the comparator
//! - Inconsistent comparators still yield a permutation of the input

use std::cmp::Ordering;

use crate::sort::comparator::{Comparator, Natural};

/// Sort `elements` with `comparator`, returning the reordered sequence.
///
/// # Errors
///
/// The first error the comparator returns, unmodified. No partial result
/// is produced.
///
/// # Example
///
/// ```
/// use kernel_bench::sort::{sort_by, BySign};
///
/// let words = vec!["pear", "fig", "banana"];
/// let by_len = sort_by(words, &mut BySign(|a: &&str, b: &&str| a.len() as i64 - b.len() as i64));
///
/// assert_eq!(by_len.unwrap(), vec!["fig", "pear", "banana"]);
/// ```
pub fn sort_by<T, C>(elements: Vec<T>, comparator: &mut C) -> Result<Vec<T>, C::Error>
where
    C: Comparator<T> + ?Sized,
{
    tracing::debug!(len = elements.len(), "generic sort");
    let order = sort_permutation(&elements, comparator)?;
    Ok(apply_permutation(elements, &order))
}

/// Sort by the element type's own ordering.
pub fn sort<T: Ord>(elements: Vec<T>) -> Vec<T> {
    let mut natural = Natural::new();
    match sort_by(elements, &mut natural) {
        Ok(sorted) => sorted,
        Err(never) => match never {},
    }
}

/// Compute the sorted order of `elements` as a permutation of indices.
///
/// `result[k]` is the index in `elements` of the element that belongs at
/// position `k`. The slice itself is untouched.
pub fn sort_permutation<T, C>(elements: &[T], comparator: &mut C) -> Result<Vec<usize>, C::Error>
where
    C: Comparator<T> + ?Sized,
{
    let len = elements.len();
    let mut src: Vec<usize> = (0..len).collect();
    let mut dst: Vec<usize> = vec![0; len];

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(
                elements,
                &src[start..mid],
                &src[mid..end],
                &mut dst[start..end],
                comparator,
            )?;
            start = end;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    Ok(src)
}

/// Merge two sorted runs of handles into `out`.
fn merge_runs<T, C>(
    elements: &[T],
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
    comparator: &mut C,
) -> Result<(), C::Error>
where
    C: Comparator<T> + ?Sized,
{
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        let ord = comparator.compare(&elements[left[i]], &elements[right[j]])?;
        if ord == Ordering::Greater {
            out[k] = right[j];
            j += 1;
        } else {
            out[k] = left[i];
            i += 1;
        }
        k += 1;
    }

    let rest_left = &left[i..];
    out[k..k + rest_left.len()].copy_from_slice(rest_left);
    k += rest_left.len();
    out[k..].copy_from_slice(&right[j..]);

    Ok(())
}

/// Move each element of `elements` into the position `order` assigns it.
///
/// `order` must be a permutation of `0..elements.len()`, as produced by
/// [`sort_permutation`]. Indices that repeat are skipped, so a malformed
/// order can lose elements but never duplicate them.
pub fn apply_permutation<T>(elements: Vec<T>, order: &[usize]) -> Vec<T> {
    debug_assert_eq!(elements.len(), order.len());
    let mut slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
        .collect()
}

/// Check that no adjacent pair is out of order under `comparator`.
pub fn is_sorted_by<T, C>(elements: &[T], comparator: &mut C) -> Result<bool, C::Error>
where
    C: Comparator<T> + ?Sized,
{
    for pair in elements.windows(2) {
        if comparator.compare(&pair[0], &pair[1])? == Ordering::Greater {
            return Ok(false);
        }
    }
    Ok(true)
}

// ============================================================================
// Unit Tests
// ============================================================================
