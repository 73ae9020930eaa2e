//! Handle-based storage for opaque elements passed through the sort engine.
//!
//! ## Design
//!
//! Elements of unknown shape (host objects, records, anything) go into a
//! slab once. The arena hands out `usize` handles and keeps an ordering of
//! those handles; sorting reorders handles only. Payloads are never copied,
//! inspected, or moved until the caller takes them back out.
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - O(1) insert, remove, and lookup by key
//!
//! ## Example
//!
//! ```
//! use kernel_bench::marshal::ElementArena;
//! use kernel_bench::sort::BySign;
//!
//! let mut arena: ElementArena<(&str, i64)> = ["c", "a", "b"]
//!     .iter()
//!     .zip([3, 1, 2])
//!     .map(|(name, rank)| (*name, rank))
//!     .collect();
//!
//! arena.sort_with(&mut BySign(|x: &(&str, i64), y: &(&str, i64)| x.1 - y.1)).unwrap();
//! let names: Vec<&str> = arena.into_sorted().into_iter().map(|(n, _)| n).collect();
//!
//! assert_eq!(names, vec!["a", "b", "c"]);
//! ```

use std::cmp::Ordering;

use slab::Slab;

use crate::sort::{sort_by, Comparator};

/// Opaque element storage with a sortable handle order.
#[derive(Debug, Clone)]
pub struct ElementArena<T> {
    /// Element payloads, keyed by handle
    slots: Slab<T>,

    /// Current order of handles
    order: Vec<usize>,
}

impl<T> Default for ElementArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementArena<T> {
    /// Create an empty arena
    pub fn new() -> Self {
        Self {
            slots: Slab::new(),
            order: Vec::new(),
        }
    }

    /// Create an arena with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Store an element at the end of the current order, returning its handle
    pub fn push(&mut self, element: T) -> usize {
        let handle = self.slots.insert(element);
        self.order.push(handle);
        handle
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Element behind `handle`
    #[inline]
    pub fn get(&self, handle: usize) -> Option<&T> {
        self.slots.get(handle)
    }

    /// Handles in their current order
    #[inline]
    pub fn handles(&self) -> &[usize] {
        &self.order
    }

    /// Elements in their current order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(move |&h| self.slots.get(h))
    }

    /// Reorder the handles with `comparator` applied to the payloads.
    ///
    /// On error the previous order is kept and the comparator's error is
    /// returned unchanged.
    pub fn sort_with<C>(&mut self, comparator: &mut C) -> Result<(), C::Error>
    where
        C: Comparator<T> + ?Sized,
    {
        let mut by_handle = ByHandle {
            slots: &self.slots,
            inner: comparator,
        };
        let sorted = sort_by(self.order.clone(), &mut by_handle)?;
        self.order = sorted;
        Ok(())
    }

    /// Take every element out, in the current order.
    pub fn into_sorted(mut self) -> Vec<T> {
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|h| self.slots.try_remove(h))
            .collect()
    }
}

impl<T> FromIterator<T> for ElementArena<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arena = Self::with_capacity(iter.size_hint().0);
        for element in iter {
            arena.push(element);
        }
        arena
    }
}

/// Lifts a payload comparator to a handle comparator.
struct ByHandle<'a, T, C: ?Sized> {
    slots: &'a Slab<T>,
    inner: &'a mut C,
}

impl<T, C> Comparator<usize> for ByHandle<'_, T, C>
where
    C: Comparator<T> + ?Sized,
{
    type Error = C::Error;

    #[inline]
    fn compare(&mut self, a: &usize, b: &usize) -> Result<Ordering, C::Error> {
        self.inner.compare(&self.slots[*a], &self.slots[*b])
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
