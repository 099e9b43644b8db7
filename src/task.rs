//! Tasks stored in a [`PriorityQueue`](crate::priority_queue::PriorityQueue)

use std::cmp::Ordering;
use std::fmt;

use crate::order::Comparator;

/// Stable identity of a task
///
/// Assigned once and never changed, even when the task's priority is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of work with a priority
///
/// Whether a larger `priority` runs first depends on the queue's
/// [`HeapOrder`](crate::order::HeapOrder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    pub priority: i64,
    pub arrival_time: u64,
    pub deadline: Option<u64>,
    pub description: String,
    pub duration: u64,
    /// Set by the scheduler once the task has run
    pub completion_time: Option<u64>,
}

impl Task {
    /// Creates a task that takes no time and has no deadline
    pub fn new(id: TaskId, priority: i64, arrival_time: u64) -> Self {
        Self {
            id,
            priority,
            arrival_time,
            deadline: None,
            description: String::new(),
            duration: 0,
            completion_time: None,
        }
    }

    /// Sets the human-readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets how many clock units the task takes to run
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the time the task should complete by
    pub fn with_deadline(mut self, deadline: Option<u64>) -> Self {
        self.deadline = deadline;
        self
    }

    /// The task's identity
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Time between arrival and completion, once completed
    pub fn turnaround_time(&self) -> Option<u64> {
        self.completion_time
            .map(|done| done.saturating_sub(self.arrival_time))
    }

    /// True if the task completed after its deadline
    pub fn missed_deadline(&self) -> bool {
        matches!(
            (self.completion_time, self.deadline),
            (Some(done), Some(deadline)) if done > deadline
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task({}, priority={}, arrival={})",
            self.id, self.priority, self.arrival_time
        )
    }
}

/// Orders tasks by `priority` alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPriority;

impl Comparator<Task> for ByPriority {
    #[inline]
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.priority.cmp(&b.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let task = Task::new(TaskId(7), 3, 10);
        assert_eq!(task.to_string(), "Task(7, priority=3, arrival=10)");
    }

    #[test]
    fn test_turnaround_and_deadline() {
        let mut task = Task::new(TaskId(1), 5, 4)
            .with_duration(6)
            .with_deadline(Some(8));
        assert_eq!(task.turnaround_time(), None);
        assert!(!task.missed_deadline());

        task.completion_time = Some(10);
        assert_eq!(task.turnaround_time(), Some(6));
        assert!(task.missed_deadline());
    }

    #[test]
    fn test_by_priority_ignores_identity() {
        let a = Task::new(TaskId(1), 5, 0);
        let b = Task::new(TaskId(2), 5, 9).with_description("other");
        assert_eq!(ByPriority.compare(&a, &b), Ordering::Equal);
        assert_eq!(
            ByPriority.compare(&a, &Task::new(TaskId(3), 6, 0)),
            Ordering::Less
        );
    }
}
