//! Comparator bridge: adapts caller-supplied ordering logic to the engine.
//!
//! ## Contract
//!
//! A [`Comparator`] is asked for the ordering of two elements once per
//! comparison the algorithm performs. It may fail; the failure type is the
//! comparator's own, so a fault raised by a host callback reaches the
//! caller exactly as it was raised.
//!
//! ## Signed results
//!
//! Host callbacks follow the `(a, b) -> number` convention: negative means
//! `a` first, positive means `b` first, zero means equal. [`Sign`] maps such
//! results onto [`Ordering`]. A NaN result is treated as zero, the same way
//! a JavaScript engine's `Array.prototype.sort` does.
//!
//! ## Adapters
//!
//! | Adapter | Wraps | Error |
//! |---------|-------|-------|
//! | [`ByOrdering`] | `FnMut(&T, &T) -> Ordering` | `Infallible` |
//! | [`BySign`] | `FnMut(&T, &T) -> S` where `S: Sign` | `Infallible` |
//! | [`TryBySign`] | `FnMut(&T, &T) -> Result<S, E>` | `E` |
//! | [`Natural`] | `T: Ord` | `Infallible` |
//! | [`Reversed`] | any comparator | inner error |
//! | [`Counting`] | any comparator | inner error |

use std::cmp::Ordering;
use std::convert::Infallible;
use std::marker::PhantomData;

/// Ordering function applied by the sort engine.
pub trait Comparator<T: ?Sized> {
    /// Failure raised by the comparator itself
    type Error;

    /// Compare `a` with `b`.
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Self::Error>;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &mut C {
    type Error = C::Error;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Self::Error> {
        (**self).compare(a, b)
    }
}

// ============================================================================
// Signed results
// ============================================================================

/// A signed comparison result: negative, zero, or positive.
pub trait Sign: Copy {
    fn to_ordering(self) -> Ordering;
}

impl Sign for i32 {
    #[inline]
    fn to_ordering(self) -> Ordering {
        self.cmp(&0)
    }
}

impl Sign for i64 {
    #[inline]
    fn to_ordering(self) -> Ordering {
        self.cmp(&0)
    }
}

impl Sign for f64 {
    #[inline]
    fn to_ordering(self) -> Ordering {
        sign_to_ordering(self)
    }
}

impl Sign for Ordering {
    #[inline]
    fn to_ordering(self) -> Ordering {
        self
    }
}

/// Map a host comparator's numeric result onto an [`Ordering`].
///
/// NaN (and negative zero) count as equal.
#[inline]
pub fn sign_to_ordering(value: f64) -> Ordering {
    if value < 0.0 {
        Ordering::Less
    } else if value > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Infallible comparator from a closure returning [`Ordering`].
pub struct ByOrdering<F>(pub F);

impl<T: ?Sized, F: FnMut(&T, &T) -> Ordering> Comparator<T> for ByOrdering<F> {
    type Error = Infallible;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok((self.0)(a, b))
    }
}

/// Infallible comparator from a closure returning a signed number.
pub struct BySign<F>(pub F);

impl<T: ?Sized, S: Sign, F: FnMut(&T, &T) -> S> Comparator<T> for BySign<F> {
    type Error = Infallible;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok((self.0)(a, b).to_ordering())
    }
}

/// Fallible comparator from a closure returning `Result<signed, E>`.
pub struct TryBySign<F>(pub F);

impl<T: ?Sized, S: Sign, E, F: FnMut(&T, &T) -> Result<S, E>> Comparator<T> for TryBySign<F> {
    type Error = E;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, E> {
        (self.0)(a, b).map(Sign::to_ordering)
    }
}

/// The element type's own [`Ord`].
pub struct Natural<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Natural<T> {
    pub fn new() -> Self {
        Natural(PhantomData)
    }
}

impl<T: ?Sized> Default for Natural<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + ?Sized> Comparator<T> for Natural<T> {
    type Error = Infallible;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok(a.cmp(b))
    }
}

/// Inverts another comparator.
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    type Error = C::Error;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, C::Error> {
        self.0.compare(a, b).map(Ordering::reverse)
    }
}

/// Counts invocations of the wrapped comparator.
///
/// Every call is a boundary crossing when the inner comparator lives in
/// the host, so the count is reported alongside the sort timing.
///
/// ```
/// use kernel_bench::sort::{sort_by, ByOrdering, Counting};
///
/// let mut cmp = Counting::new(ByOrdering(|a: &i32, b: &i32| a.cmp(b)));
/// let sorted = sort_by(vec![3, 1, 2], &mut cmp).unwrap();
///
/// assert_eq!(sorted, vec![1, 2, 3]);
/// assert!(cmp.count() >= 2);
/// ```
pub struct Counting<C> {
    inner: C,
    count: u64,
}

impl<C> Counting<C> {
    pub fn new(inner: C) -> Self {
        Self { inner, count: 0 }
    }

    /// Comparisons performed so far
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Counting<C> {
    type Error = C::Error;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, C::Error> {
        self.count += 1;
        self.inner.compare(a, b)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_to_ordering() {
        assert_eq!(sign_to_ordering(-3.5), Ordering::Less);
        assert_eq!(sign_to_ordering(0.0), Ordering::Equal);
        assert_eq!(sign_to_ordering(-0.0), Ordering::Equal);
        assert_eq!(sign_to_ordering(1e-300), Ordering::Greater);
        assert_eq!(sign_to_ordering(f64::NAN), Ordering::Equal);
        assert_eq!(sign_to_ordering(f64::NEG_INFINITY), Ordering::Less);
    }

    #[test]
    fn test_integer_signs() {
        assert_eq!((-7i32).to_ordering(), Ordering::Less);
        assert_eq!(0i64.to_ordering(), Ordering::Equal);
        assert_eq!(i64::MAX.to_ordering(), Ordering::Greater);
    }

    #[test]
    fn test_by_sign_subtraction_style() {
        let mut cmp = BySign(|a: &f64, b: &f64| a - b);
        assert_eq!(cmp.compare(&1.0, &2.0), Ok(Ordering::Less));
        assert_eq!(cmp.compare(&2.0, &2.0), Ok(Ordering::Equal));
        assert_eq!(cmp.compare(&3.0, &2.0), Ok(Ordering::Greater));
    }

    #[test]
    fn test_try_by_sign_propagates() {
        let mut cmp = TryBySign(|a: &i32, b: &i32| {
            if *a == 13 || *b == 13 {
                Err("unlucky")
            } else {
                Ok(a - b)
            }
        });
        assert_eq!(cmp.compare(&1, &2), Ok(Ordering::Less));
        assert_eq!(cmp.compare(&13, &2), Err("unlucky"));
    }

    #[test]
    fn test_natural_and_reversed() {
        let mut natural = Natural::<str>::new();
        assert_eq!(natural.compare("a", "b"), Ok(Ordering::Less));

        let mut reversed = Reversed(Natural::<i32>::new());
        assert_eq!(reversed.compare(&1, &2), Ok(Ordering::Greater));
    }

    #[test]
    fn test_counting() {
        let mut cmp = Counting::new(Natural::<u8>::new());
        for _ in 0..5 {
            cmp.compare(&1, &2).unwrap();
        }
        assert_eq!(cmp.count(), 5);
        cmp.reset();
        assert_eq!(cmp.count(), 0);
    }

    #[test]
    fn test_counting_counts_failures() {
        let mut cmp = Counting::new(TryBySign(|_: &i32, _: &i32| Err::<i32, _>(())));
        assert!(cmp.compare(&1, &2).is_err());
        assert_eq!(cmp.count(), 1);
    }
}
