//! Sequential task scheduler
//!
//! [`TaskScheduler`] runs tasks one at a time, always picking the queued task
//! with the largest priority number. Time is a logical clock that only moves
//! forward by the duration of each executed task.
//!
//! # Example
//!
//! ```rust
//! use task_heap::scheduler::TaskScheduler;
//!
//! let mut scheduler = TaskScheduler::new();
//! scheduler.add_task("System Backup", 1, 30, None);
//! scheduler.add_task("Critical Bug Fix", 10, 15, None);
//!
//! let first = scheduler.execute_next().unwrap();
//! assert_eq!(first.description, "Critical Bug Fix");
//! assert_eq!(first.completion_time, Some(15));
//!
//! scheduler.run_all();
//! let stats = scheduler.statistics().unwrap();
//! assert_eq!(stats.total_completed, 2);
//! assert_eq!(stats.current_time, 45);
//! ```

use std::fmt;

use tracing::{debug, info};

use crate::error::QueueError;
use crate::order::HeapOrder;
use crate::priority_queue::PriorityQueue;
use crate::task::{Task, TaskId};
use crate::traits::Heap;

/// Aggregates over completed tasks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total_completed: usize,
    /// Mean of `completion_time - arrival_time`
    pub average_waiting_time: f64,
    /// Mean of `completion_time - arrival_time`
    ///
    /// Tasks run without preemption and arrival is the only recorded start,
    /// so this is the same quantity as `average_waiting_time`.
    pub average_turnaround_time: f64,
    pub current_time: u64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total_completed: {}", self.total_completed)?;
        writeln!(f, "average_waiting_time: {}", self.average_waiting_time)?;
        writeln!(f, "average_turnaround_time: {}", self.average_turnaround_time)?;
        write!(f, "current_time: {}", self.current_time)
    }
}

/// Runs queued tasks highest priority first
///
/// Not safe for concurrent use without external synchronisation.
#[derive(Debug, Clone)]
pub struct TaskScheduler {
    queue: PriorityQueue,
    completed: Vec<Task>,
    current_time: u64,
    next_id: u64,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(HeapOrder::Max),
            completed: Vec::new(),
            current_time: 0,
            next_id: 1,
        }
    }

    /// Queues a new task arriving at the current time
    ///
    /// Identities are handed out sequentially starting at 1.
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        priority: i64,
        duration: u64,
        deadline: Option<u64>,
    ) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let task = Task::new(id, priority, self.current_time)
            .with_description(description)
            .with_duration(duration)
            .with_deadline(deadline);

        info!(task_id = %id, priority, description = %task.description, "added task");
        self.queue.insert(task);
        id
    }

    /// Runs the highest-priority task to completion
    ///
    /// Returns `None` if nothing is queued. The clock saturates at
    /// `u64::MAX` instead of wrapping.
    pub fn execute_next(&mut self) -> Option<Task> {
        let Some(mut task) = self.queue.extract_top() else {
            debug!("no tasks to execute");
            return None;
        };

        self.current_time = self.current_time.saturating_add(task.duration);
        task.completion_time = Some(self.current_time);
        info!(
            task_id = %task.id(),
            priority = task.priority,
            current_time = self.current_time,
            description = %task.description,
            "executed task"
        );

        self.completed.push(task.clone());
        Some(task)
    }

    /// Executes tasks until the queue is empty, returning how many ran
    pub fn run_all(&mut self) -> usize {
        std::iter::from_fn(|| self.execute_next()).count()
    }

    /// Changes the priority of a queued task
    ///
    /// # Errors
    /// Returns `QueueError::TaskNotFound` if the task is not queued,
    /// including when it has already been executed.
    pub fn change_priority(&mut self, id: TaskId, new_priority: i64) -> Result<(), QueueError> {
        self.queue.change_priority(id, new_priority)
    }

    /// Queued tasks in execution order, without touching the queue
    pub fn show_queue(&self) -> Vec<Task> {
        self.queue.snapshot()
    }

    /// Scheduling statistics, or `None` before any task has completed
    pub fn statistics(&self) -> Option<Statistics> {
        if self.completed.is_empty() {
            return None;
        }

        let total = self.completed.len();
        let total_turnaround = self
            .completed
            .iter()
            .filter_map(Task::turnaround_time)
            .fold(0u64, u64::saturating_add);
        let average = total_turnaround as f64 / total as f64;

        Some(Statistics {
            total_completed: total,
            average_waiting_time: average,
            average_turnaround_time: average,
            current_time: self.current_time,
        })
    }

    /// Completed tasks that finished after their deadline
    pub fn missed_deadlines(&self) -> impl Iterator<Item = &Task> + '_ {
        self.completed.iter().filter(|task| task.missed_deadline())
    }

    /// Completed tasks in execution order
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn queue(&self) -> &PriorityQueue {
        &self.queue
    }

    pub fn current_time(&self) -> u64 {
        self.current_time
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The five-task workload used by the demo
    fn demo_scheduler() -> TaskScheduler {
        let mut scheduler = TaskScheduler::new();
        scheduler.add_task("System Backup", 1, 30, None);
        scheduler.add_task("User Request", 5, 5, None);
        scheduler.add_task("Critical Bug Fix", 10, 15, None);
        scheduler.add_task("Email Processing", 2, 10, None);
        scheduler.add_task("Security Patch", 8, 20, None);
        scheduler
    }

    #[test]
    fn test_execution_order() {
        let mut scheduler = demo_scheduler();
        let order: Vec<(String, u64)> = std::iter::from_fn(|| scheduler.execute_next())
            .map(|t| (t.description, t.completion_time.unwrap()))
            .collect();

        assert_eq!(
            order,
            vec![
                ("Critical Bug Fix".to_string(), 15),
                ("Security Patch".to_string(), 35),
                ("User Request".to_string(), 40),
                ("Email Processing".to_string(), 50),
                ("System Backup".to_string(), 80),
            ]
        );
        assert!(scheduler.execute_next().is_none());
    }

    #[test]
    fn test_statistics() {
        let mut scheduler = demo_scheduler();
        assert_eq!(scheduler.statistics(), None);

        assert_eq!(scheduler.run_all(), 5);
        let stats = scheduler.statistics().unwrap();
        assert_eq!(stats.total_completed, 5);
        assert_eq!(stats.current_time, 80);
        // (15 + 35 + 40 + 50 + 80) / 5
        assert_eq!(stats.average_waiting_time, 44.0);
        assert_eq!(stats.average_turnaround_time, stats.average_waiting_time);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut scheduler = TaskScheduler::new();
        assert_eq!(scheduler.add_task("a", 1, 1, None), TaskId(1));
        assert_eq!(scheduler.add_task("b", 1, 1, None), TaskId(2));
        scheduler.execute_next();
        assert_eq!(scheduler.add_task("c", 1, 1, None), TaskId(3));
    }

    #[test]
    fn test_arrival_uses_current_time() {
        let mut scheduler = TaskScheduler::new();
        scheduler.add_task("first", 1, 7, None);
        scheduler.execute_next();
        let id = scheduler.add_task("second", 1, 3, None);
        assert_eq!(scheduler.queue().get(id).map(|t| t.arrival_time), Some(7));
    }

    #[test]
    fn test_show_queue_is_non_destructive() {
        let scheduler = demo_scheduler();
        let shown: Vec<i64> = scheduler.show_queue().iter().map(|t| t.priority).collect();
        assert_eq!(shown, vec![10, 8, 5, 2, 1]);
        assert_eq!(scheduler.queue().len(), 5);
        assert_eq!(scheduler.show_queue().len(), 5);
    }

    #[test]
    fn test_change_priority_reorders_execution() {
        let mut scheduler = demo_scheduler();
        scheduler.change_priority(TaskId(1), 100).unwrap();
        assert_eq!(
            scheduler.execute_next().map(|t| t.description),
            Some("System Backup".to_string())
        );
        assert_eq!(
            scheduler.change_priority(TaskId(1), 5),
            Err(QueueError::TaskNotFound(TaskId(1)))
        );
    }

    #[test]
    fn test_clock_saturates_on_huge_durations() {
        let mut scheduler = TaskScheduler::new();
        scheduler.add_task("a", 2, u64::MAX, None);
        scheduler.add_task("b", 1, 1, None);

        assert_eq!(scheduler.execute_next().and_then(|t| t.completion_time), Some(u64::MAX));
        assert_eq!(scheduler.execute_next().and_then(|t| t.completion_time), Some(u64::MAX));
        assert!(scheduler.queue().is_empty());
        assert_eq!(scheduler.current_time(), u64::MAX);

        let stats = scheduler.statistics().unwrap();
        assert_eq!(stats.total_completed, 2);
        assert_eq!(stats.current_time, u64::MAX);
        assert_eq!(stats.average_waiting_time, u64::MAX as f64 / 2.0);
    }

    #[test]
    fn test_missed_deadlines() {
        let mut scheduler = TaskScheduler::new();
        scheduler.add_task("slow", 10, 50, Some(40));
        scheduler.add_task("fast", 5, 5, Some(60));
        scheduler.run_all();
        let missed: Vec<&str> = scheduler
            .missed_deadlines()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(missed, vec!["slow"]);
    }
}
