//! Ordering strategies for heaps
//!
//! A heap's orientation is a value chosen at construction rather than a
//! property of the element type:
//!
//! - [`HeapOrder`] selects whether the greatest ([`HeapOrder::Max`]) or the
//!   least ([`HeapOrder::Min`]) element sits at the root.
//! - [`Comparator`] decides how two elements compare. Any
//!   `Fn(&T, &T) -> Ordering` closure is a comparator, [`NaturalOrder`]
//!   uses `T: Ord`, and [`ByKey`] compares an extracted key.
//!
//! # Example
//!
//! ```rust
//! use task_heap::Heap;
//! use task_heap::binary_heap::BinaryHeap;
//! use task_heap::order::{ByKey, HeapOrder};
//!
//! let mut heap = BinaryHeap::with_comparator(HeapOrder::Min, ByKey(|s: &&str| s.len()));
//! heap.insert("three");
//! heap.insert("a");
//! heap.insert("to");
//! assert_eq!(heap.extract_top(), Some("a"));
//! ```

use std::cmp::Ordering;

/// Orientation of the heap invariant
///
/// Fixed when a heap is created; no heap in this crate exposes a way to
/// change it afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    /// The parent is never less than its children; the greatest element is on top
    #[default]
    Max,
    /// The parent is never greater than its children; the least element is on top
    Min,
}

impl HeapOrder {
    /// Returns true if an element that compares as `ordering` against
    /// another must be placed above it
    #[inline]
    pub fn prefers(self, ordering: Ordering) -> bool {
        match self {
            HeapOrder::Max => ordering == Ordering::Greater,
            HeapOrder::Min => ordering == Ordering::Less,
        }
    }
}

/// Total order over heap elements
pub trait Comparator<T> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares elements with their `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Compares elements by a key extracted from each of them
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}
