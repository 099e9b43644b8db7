//! Array-backed binary heap
//!
//! [`BinaryHeap`] stores its elements in a `Vec` laid out as a complete
//! binary tree: the children of index `i` live at `2i + 1` and `2i + 2`, its
//! parent at `(i - 1) / 2`. Whether the greatest or the least element is on
//! top is decided by the [`HeapOrder`] given at construction, and elements
//! are compared with a [`Comparator`], so the same container serves as a
//! max-heap, a min-heap, or a heap keyed on one field of a record.
//!
//! The repair operations are also exported as free functions over slices.
//! [`sift_down`] takes an explicit `end` boundary so that a single slice can
//! hold a live heap in its prefix and already-placed elements in its suffix,
//! which is what [`heap_sort`](crate::heap_sort) relies on.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_top` | O(log n)   |
//! | `peek`        | O(1)       |
//! | `from_vec`    | O(n)       |
//! | `position`    | O(n)       |
//! | `update`      | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use task_heap::Heap;
//! use task_heap::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::max();
//! for p in [1, 5, 10, 2, 8] {
//!     heap.insert(p);
//! }
//!
//! assert_eq!(heap.peek(), Some(&10));
//! assert_eq!(heap.extract_top(), Some(10));
//! assert_eq!(heap.extract_top(), Some(8));
//! assert_eq!(heap.len(), 3);
//! ```

use crate::order::{Comparator, HeapOrder, NaturalOrder};
use crate::traits::Heap;

/// Moves the element at `index` towards the root while `prefers(node, parent)`
///
/// Returns the final index of the element; it equals `index` when no swap
/// was needed.
pub fn sift_up<T, F>(data: &mut [T], mut index: usize, mut prefers: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    while index > 0 {
        let parent = (index - 1) / 2;
        if prefers(&data[index], &data[parent]) {
            data.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
    index
}

/// Moves the element at `index` towards the leaves, looking only at `data[..end]`
///
/// At each level the preferred child is chosen and swapped with the node if
/// the node does not already dominate it. Returns the final index of the
/// element.
pub fn sift_down<T, F>(data: &mut [T], mut index: usize, end: usize, mut prefers: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(end <= data.len());
    loop {
        let left = 2 * index + 1;
        if left >= end {
            break;
        }
        let right = left + 1;
        let mut extreme = index;

        if prefers(&data[left], &data[extreme]) {
            extreme = left;
        }
        if right < end && prefers(&data[right], &data[extreme]) {
            extreme = right;
        }

        if extreme == index {
            break;
        }
        data.swap(index, extreme);
        index = extreme;
    }
    index
}

/// Rearranges `data` into a heap in O(n)
///
/// Every internal node, from the last parent `n / 2 - 1` down to the root,
/// is sifted down over the whole slice.
pub fn build_heap<T, F>(data: &mut [T], mut prefers: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    for index in (0..len / 2).rev() {
        sift_down(data, index, len, &mut prefers);
    }
}

/// Returns true if `data[..end]` satisfies the heap invariant
///
/// No node may be preferred over its parent.
pub fn is_heap<T, F>(data: &[T], end: usize, mut prefers: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..end.min(data.len())).all(|i| !prefers(&data[i], &data[(i - 1) / 2]))
}

/// A binary heap with a construction-time [`HeapOrder`]
///
/// `C` decides how elements compare; it defaults to the element's own `Ord`.
///
/// Not safe for concurrent mutation: every mutating method takes `&mut self`,
/// so sharing a heap across threads needs external synchronisation such as a
/// `Mutex`.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = NaturalOrder> {
    /// The heap data in level order
    data: Vec<T>,
    order: HeapOrder,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap ordered by `T`'s `Ord` implementation
    pub fn new(order: HeapOrder) -> Self {
        Self::with_comparator(order, NaturalOrder)
    }

    /// Creates an empty heap with the greatest element on top
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Creates an empty heap with the least element on top
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap that compares elements with `cmp`
    pub fn with_comparator(order: HeapOrder, cmp: C) -> Self {
        Self {
            data: Vec::new(),
            order,
            cmp,
        }
    }

    /// Builds a heap from an unordered vector in O(n)
    pub fn from_vec(order: HeapOrder, cmp: C, mut data: Vec<T>) -> Self {
        build_heap(&mut data, |a, b| order.prefers(cmp.compare(a, b)));
        Self { data, order, cmp }
    }

    /// The elements in storage (level) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in storage (level) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks the heap invariant over every element
    pub fn is_valid(&self) -> bool {
        let (order, cmp) = (self.order, &self.cmp);
        is_heap(&self.data, self.data.len(), |a, b| {
            order.prefers(cmp.compare(a, b))
        })
    }

    /// Index of the first element, in storage order, matching `pred`
    ///
    /// This is a linear scan; no position index is maintained.
    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().position(pred)
    }

    /// Mutates the element at `index` in place and restores the invariant
    ///
    /// The element is first sifted up; only if it did not move is it sifted
    /// down. Trying both directions is what keeps the invariant whichever way
    /// the element's key moved. Returns the element's new index, or `None`
    /// if `index` is out of bounds.
    pub fn update<F>(&mut self, index: usize, f: F) -> Option<usize>
    where
        F: FnOnce(&mut T),
    {
        f(self.data.get_mut(index)?);

        let (order, cmp) = (self.order, &self.cmp);
        let mut prefers = |a: &T, b: &T| order.prefers(cmp.compare(a, b));
        let raised = sift_up(&mut self.data, index, &mut prefers);
        if raised != index {
            return Some(raised);
        }
        let len = self.data.len();
        Some(sift_down(&mut self.data, index, len, &mut prefers))
    }
}

impl<T, C: Comparator<T>> Heap<T> for BinaryHeap<T, C> {
    fn order(&self) -> HeapOrder {
        self.order
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        let (order, cmp) = (self.order, &self.cmp);
        sift_up(&mut self.data, last, |a, b| order.prefers(cmp.compare(a, b)));
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn extract_top(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let top = self.data.swap_remove(0);
        let len = self.data.len();
        if len > 1 {
            let (order, cmp) = (self.order, &self.cmp);
            sift_down(&mut self.data, 0, len, |a, b| {
                order.prefers(cmp.compare(a, b))
            });
        }

        Some(top)
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::max()
    }
}
