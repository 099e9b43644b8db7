//! Common traits for heap data structures
//!
//! [`Heap`] is the interface shared by the plain [`BinaryHeap`] and the
//! task-shaped [`PriorityQueue`], so code and tests can be written once for
//! both. Unlike `std::collections::BinaryHeap`, the orientation is not fixed:
//! each heap reports the [`HeapOrder`] it was built with.
//!
//! Empty containers are signalled with `None`, never with a panic.
//!
//! # Example
//!
//! ```rust
//! use task_heap::Heap;
//! use task_heap::binary_heap::BinaryHeap;
//!
//! fn drain<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
//!     std::iter::from_fn(|| heap.extract_top()).collect()
//! }
//!
//! let mut heap = BinaryHeap::min();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//! assert_eq!(drain(&mut heap), vec![1, 2, 3]);
//! ```
//!
//! [`BinaryHeap`]: crate::binary_heap::BinaryHeap
//! [`PriorityQueue`]: crate::priority_queue::PriorityQueue

use crate::order::HeapOrder;

/// Base trait for heap/priority queue data structures
pub trait Heap<T> {
    /// The orientation chosen when the heap was created
    fn order(&self) -> HeapOrder;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, item: T);

    /// Returns the top element without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_top(&mut self) -> Option<T>;
}
