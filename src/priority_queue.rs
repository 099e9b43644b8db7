//! Task priority queue
//!
//! [`PriorityQueue`] is a [`BinaryHeap`] of [`Task`]s ordered by
//! [`ByPriority`], plus the one operation a plain heap does not offer:
//! changing the priority of a queued task identified by its [`TaskId`].
//!
//! Locating the task is a linear scan over the heap storage; no index from
//! identity to position is kept, so `change_priority` is O(n) to find and
//! O(log n) to repair.
//!
//! # Example
//!
//! ```rust
//! use task_heap::Heap;
//! use task_heap::priority_queue::PriorityQueue;
//! use task_heap::task::{Task, TaskId};
//!
//! let mut queue = PriorityQueue::max();
//! queue.insert(Task::new(TaskId(1), 1, 0));
//! queue.insert(Task::new(TaskId(2), 5, 0));
//!
//! queue.change_priority(TaskId(1), 10).unwrap();
//! assert_eq!(queue.peek().map(|t| t.id()), Some(TaskId(1)));
//! ```

use tracing::{debug, trace};

use crate::binary_heap::BinaryHeap;
use crate::error::QueueError;
use crate::order::HeapOrder;
use crate::task::{ByPriority, Task, TaskId};
use crate::traits::Heap;

/// A heap of tasks with identity-based priority changes
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    heap: BinaryHeap<Task, ByPriority>,
}

impl PriorityQueue {
    /// Creates an empty queue; `order` can not be changed later
    pub fn new(order: HeapOrder) -> Self {
        Self {
            heap: BinaryHeap::with_comparator(order, ByPriority),
        }
    }

    /// Larger priority numbers come out first
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Smaller priority numbers come out first
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Builds a queue from unordered tasks in O(n)
    pub fn from_tasks(order: HeapOrder, tasks: Vec<Task>) -> Self {
        Self {
            heap: BinaryHeap::from_vec(order, ByPriority, tasks),
        }
    }

    /// Sets the priority of the task with identity `id`
    ///
    /// The task is first sifted up; only if that does not move it is it
    /// sifted down. Deciding the direction from the old and new values alone
    /// is not enough to restore the invariant in general.
    ///
    /// # Errors
    /// Returns `QueueError::TaskNotFound` if no queued task has `id`; the
    /// queue is left untouched.
    ///
    /// # Time Complexity
    /// O(n) to locate the task, O(log n) to restore the invariant.
    pub fn change_priority(&mut self, id: TaskId, new_priority: i64) -> Result<(), QueueError> {
        let index = self
            .heap
            .position(|task| task.id() == id)
            .ok_or(QueueError::TaskNotFound(id))?;

        let mut old_priority = new_priority;
        let moved_to = self
            .heap
            .update(index, |task| {
                old_priority = task.priority;
                task.priority = new_priority;
            })
            .ok_or(QueueError::TaskNotFound(id))?;

        debug!(
            task_id = %id,
            old_priority,
            new_priority,
            from = index,
            to = moved_to,
            "changed task priority"
        );
        Ok(())
    }

    /// Returns true if a task with identity `id` is queued
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// The queued task with identity `id`
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.heap.iter().find(|task| task.id() == id)
    }

    /// Iterates over queued tasks in storage order, not priority order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.heap.iter()
    }

    /// Checks the heap invariant over every queued task
    pub fn is_valid(&self) -> bool {
        self.heap.is_valid()
    }

    /// Queued tasks in the order they would be extracted
    ///
    /// Works on a copy of the storage; the queue itself is not modified.
    pub fn snapshot(&self) -> Vec<Task> {
        let mut copy = self.clone();
        trace!(queued = copy.len(), "draining queue copy");
        copy.drain_ordered().collect()
    }

    /// Removes tasks in the order they would be extracted
    ///
    /// Each step is one `extract_top`; tasks not yet yielded when the
    /// iterator is dropped stay queued.
    pub fn drain_ordered(&mut self) -> impl Iterator<Item = Task> + '_ {
        std::iter::from_fn(move || self.heap.extract_top())
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::max()
    }
}

impl Heap<Task> for PriorityQueue {
    fn order(&self) -> HeapOrder {
        self.heap.order()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, task: Task) {
        self.heap.insert(task);
    }

    fn peek(&self) -> Option<&Task> {
        self.heap.peek()
    }

    fn extract_top(&mut self) -> Option<Task> {
        self.heap.extract_top()
    }
}
