//! Error types for queue operations

use thiserror::Error;

use crate::task::TaskId;

/// Error type for priority queue operations
///
/// An empty queue is not an error; it is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// No queued task has the given identity
    #[error("task {0} is not in the queue")]
    TaskNotFound(TaskId),
}
