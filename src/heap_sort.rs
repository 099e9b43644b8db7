//! In-place heap sort
//!
//! Sorts a slice ascending by turning it into a max-heap and then repeatedly
//! swapping the root into the end of the shrinking heap prefix. The placed
//! suffix is kept out of the heap by the `end` boundary of
//! [`sift_down`](crate::binary_heap::sift_down).
//!
//! - O(1) auxiliary memory
//! - Θ(n log n) comparisons for every input order: sorted, reversed and
//!   nearly-sorted inputs get no fast path
//! - Not stable: equal elements may be reordered
//!
//! # Example
//!
//! ```rust
//! use task_heap::heap_sort::heap_sort;
//!
//! let mut data = [5, 2, 9, 1, 5, 6];
//! heap_sort(&mut data);
//! assert_eq!(data, [1, 2, 5, 5, 6, 9]);
//! ```

use std::cmp::Ordering;

use crate::binary_heap::{build_heap, sift_down};

/// Sorts `data` ascending
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, |a, b| a.cmp(b));
}

/// Sorts `data` ascending by the key `f` extracts
pub fn heap_sort_by_key<T, K, F>(data: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    heap_sort_by(data, |a, b| f(a).cmp(&f(b)));
}

/// Sorts `data` ascending according to `compare`
pub fn heap_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut greater = |a: &T, b: &T| compare(a, b) == Ordering::Greater;

    build_heap(data, &mut greater);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, &mut greater);
    }
}

/// Sorts `data` in place and hands the same vector back
pub fn sorted<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    heap_sort(&mut data);
    data
}
