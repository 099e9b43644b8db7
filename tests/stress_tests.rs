//! Stress tests that push the heap, queue and scheduler with large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use task_heap::binary_heap::BinaryHeap;
use task_heap::heap_sort::heap_sort;
use task_heap::priority_queue::PriorityQueue;
use task_heap::scheduler::TaskScheduler;
use task_heap::task::{Task, TaskId};
use task_heap::{Heap, HeapOrder};

/// Test massive numbers of inserts and extracts
#[test]
fn test_massive_operations() {
    let mut heap = BinaryHeap::min();

    for i in (0..10_000).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 10_000);
    assert!(heap.is_valid());

    for i in 0..10_000 {
        assert_eq!(heap.extract_top(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and extract
#[test]
fn test_alternating_ops() {
    let mut heap = BinaryHeap::max();

    for i in 0..2_000 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert!(heap.extract_top().is_some());
    }
    assert_eq!(heap.len(), 2_000);
    assert!(heap.is_valid());

    let mut last = i32::MAX;
    while let Some(value) = heap.extract_top() {
        assert!(value <= last);
        last = value;
    }
}

/// Test many priority changes on a large queue
#[test]
fn test_many_priority_changes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut queue = PriorityQueue::new(HeapOrder::Max);
    for id in 0..1_000u64 {
        queue.insert(Task::new(TaskId(id), rng.gen_range(-500..500), 0));
    }

    for _ in 0..5_000 {
        let id = TaskId(rng.gen_range(0..1_000));
        assert!(queue.change_priority(id, rng.gen_range(-1_000..1_000)).is_ok());
    }
    assert!(queue.is_valid());
    assert_eq!(queue.len(), 1_000);

    let mut last = i64::MAX;
    while let Some(task) = queue.extract_top() {
        assert!(task.priority <= last);
        last = task.priority;
    }
}

/// Test that priorities pushed to both extremes land at the top and bottom
#[test]
fn test_priority_changes_to_extremes() {
    let mut queue = PriorityQueue::min();
    for id in 0..500u64 {
        queue.insert(Task::new(TaskId(id), id as i64, 0));
    }

    queue.change_priority(TaskId(499), i64::MIN).unwrap();
    queue.change_priority(TaskId(0), i64::MAX).unwrap();
    assert!(queue.is_valid());

    assert_eq!(queue.peek().map(|t| t.id()), Some(TaskId(499)));
    let last = std::iter::from_fn(|| queue.extract_top()).last();
    assert_eq!(last.map(|t| t.id()), Some(TaskId(0)));
}

/// Test heap sort on large inputs with many duplicates
#[test]
fn test_sort_large_with_duplicates() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data: Vec<u8> = (0..100_000).map(|_| rng.gen()).collect();
    let mut expected = data.clone();
    expected.sort_unstable();

    heap_sort(&mut data);
    assert_eq!(data, expected);
}

/// Test a long scheduler run with tasks arriving between executions
#[test]
fn test_scheduler_long_run() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut scheduler = TaskScheduler::new();
    let mut total_duration = 0;

    for round in 0..200 {
        for _ in 0..3 {
            let duration = rng.gen_range(1..20);
            total_duration += duration;
            scheduler.add_task(format!("job {}", round), rng.gen_range(0..10), duration, None);
        }
        scheduler.execute_next();
    }
    assert_eq!(scheduler.queue().len(), 400);

    scheduler.run_all();
    assert!(scheduler.queue().is_empty());
    assert_eq!(scheduler.current_time(), total_duration);

    let completed = scheduler.completed();
    assert_eq!(completed.len(), 600);
    assert!(completed
        .iter()
        .all(|t| t.completion_time.unwrap() >= t.arrival_time + t.duration));

    let stats = scheduler.statistics().unwrap();
    assert_eq!(stats.total_completed, 600);
    assert_eq!(stats.current_time, total_duration);
}
