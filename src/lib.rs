//! Binary heap ordering for sorting and task scheduling
//!
//! This crate provides one array-backed binary heap and the things built
//! directly on its invariant:
//!
//! - **BinaryHeap**: `Vec`-backed complete binary tree with a max- or
//!   min-ordering chosen at construction; O(log n) insert and extract, O(n)
//!   construction from a vector
//! - **Heap sort**: in-place, unstable, Θ(n log n) ascending sort reusing the
//!   heap's sift-down with an explicit boundary
//! - **PriorityQueue**: heap of tasks with priority changes by task identity
//! - **TaskScheduler**: runs queued tasks highest priority first on a logical
//!   clock and reports completion statistics
//!
//! All structures are single-threaded: mutation takes `&mut self`, and
//! sharing one across threads requires external synchronisation.
//!
//! # Example
//!
//! ```rust
//! use task_heap::Heap;
//! use task_heap::priority_queue::PriorityQueue;
//! use task_heap::task::{Task, TaskId};
//!
//! let mut queue = PriorityQueue::max();
//! for (id, priority) in [(1, 1), (2, 5), (3, 10), (4, 2), (5, 8)] {
//!     queue.insert(Task::new(TaskId(id), priority, 0));
//! }
//!
//! queue.change_priority(TaskId(1), 20).unwrap();
//! let order: Vec<i64> = std::iter::from_fn(|| queue.extract_top())
//!     .map(|t| t.priority)
//!     .collect();
//! assert_eq!(order, vec![20, 10, 8, 5, 2]);
//! ```

pub mod binary_heap;
pub mod error;
pub mod harness;
pub mod heap_sort;
pub mod order;
pub mod priority_queue;
pub mod scheduler;
pub mod task;
pub mod traits;

// Re-export the main types for convenience
pub use error::QueueError;
pub use order::HeapOrder;
pub use traits::Heap;
