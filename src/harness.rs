//! Input generation and timing for demos and benchmarks
//!
//! Nothing in here is used by the heap or scheduler themselves; it only
//! drives them. Inputs are produced from a caller-supplied RNG so runs can be
//! reproduced from a seed.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::seq::index;
use rand::Rng;
use thiserror::Error;

use crate::heap_sort::heap_sort_by;
use crate::priority_queue::PriorityQueue;
use crate::task::{Task, TaskId};
use crate::traits::Heap;

/// Largest value produced by [`random_values`]
pub const MAX_VALUE: u32 = 100_000;

/// Shape of a sort input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Random,
    Sorted,
    ReverseSorted,
    /// Sorted, then a fraction of positions swapped pairwise at random
    NearlySorted,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Random,
        Scenario::Sorted,
        Scenario::ReverseSorted,
        Scenario::NearlySorted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Random => "random",
            Scenario::Sorted => "sorted",
            Scenario::ReverseSorted => "reverse-sorted",
            Scenario::NearlySorted => "nearly-sorted",
        }
    }

    /// Derives this scenario's input from `base`
    ///
    /// `swap_fraction` is only used by [`Scenario::NearlySorted`]: that many
    /// times `base.len()` random pairs of distinct positions are swapped.
    pub fn arrange<R: Rng + ?Sized>(self, base: &[u32], swap_fraction: f64, rng: &mut R) -> Vec<u32> {
        let mut data = base.to_vec();
        match self {
            Scenario::Random => {}
            Scenario::Sorted => data.sort_unstable(),
            Scenario::ReverseSorted => data.sort_unstable_by(|a, b| b.cmp(a)),
            Scenario::NearlySorted => {
                data.sort_unstable();
                if data.len() >= 2 {
                    let swaps = (swap_fraction * data.len() as f64) as usize;
                    for _ in 0..swaps {
                        let pair = index::sample(rng, data.len(), 2);
                        data.swap(pair.index(0), pair.index(1));
                    }
                }
            }
        }
        data
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown [`Scenario`] name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scenario `{0}` (expected random, sorted, reverse-sorted or nearly-sorted)")]
pub struct ParseScenarioError(String);

impl FromStr for Scenario {
    type Err = ParseScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseScenarioError(s.to_string()))
    }
}

/// `n` values drawn uniformly from `0..=MAX_VALUE`
pub fn random_values<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(0..=MAX_VALUE)).collect()
}

/// Heap-sorts `data`, returning how many comparisons were made
pub fn count_sort_comparisons<T: Ord>(data: &mut [T]) -> usize {
    let mut comparisons = 0;
    heap_sort_by(data, |a, b| {
        comparisons += 1;
        a.cmp(b)
    });
    comparisons
}

/// One heap sort measurement
#[derive(Debug, Clone, Copy)]
pub struct SortTiming {
    pub size: usize,
    pub scenario: Scenario,
    pub elapsed: Duration,
    pub comparisons: usize,
}

impl SortTiming {
    /// Comparisons divided by n·log₂n
    pub fn comparisons_per_nlogn(&self) -> f64 {
        if self.size < 2 {
            return 0.0;
        }
        let n = self.size as f64;
        self.comparisons as f64 / (n * n.log2())
    }
}

/// Sorts `data` once, timing it and counting comparisons
pub fn time_sort(scenario: Scenario, mut data: Vec<u32>) -> SortTiming {
    let size = data.len();
    let start = Instant::now();
    let comparisons = count_sort_comparisons(&mut data);
    let elapsed = start.elapsed();
    debug_assert!(data.windows(2).all(|w| w[0] <= w[1]));

    SortTiming {
        size,
        scenario,
        elapsed,
        comparisons,
    }
}

/// One priority queue measurement
#[derive(Debug, Clone, Copy)]
pub struct QueueTiming {
    pub size: usize,
    pub insert: Duration,
    pub extract: Duration,
}

/// Inserts `size` tasks with random priorities in `1..=100`, then extracts them all
pub fn time_queue<R: Rng + ?Sized>(size: usize, rng: &mut R) -> QueueTiming {
    let tasks: Vec<Task> = (0..size)
        .map(|i| Task::new(TaskId(i as u64), rng.gen_range(1..=100), 0))
        .collect();
    let mut queue = PriorityQueue::max();

    let start = Instant::now();
    for task in tasks {
        queue.insert(task);
    }
    let insert = start.elapsed();

    let start = Instant::now();
    while queue.extract_top().is_some() {}
    let extract = start.elapsed();

    QueueTiming {
        size,
        insert,
        extract,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_copy(data: &[u32]) -> Vec<u32> {
        let mut copy = data.to_vec();
        copy.sort_unstable();
        copy
    }

    #[test]
    fn test_scenarios_are_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = random_values(500, &mut rng);
        for scenario in Scenario::ALL {
            let data = scenario.arrange(&base, 0.05, &mut rng);
            assert_eq!(sorted_copy(&data), sorted_copy(&base), "{}", scenario);
        }
    }

    #[test]
    fn test_scenario_shapes() {
        let mut rng = StdRng::seed_from_u64(11);
        let base = random_values(200, &mut rng);

        let sorted = Scenario::Sorted.arrange(&base, 0.0, &mut rng);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let reversed = Scenario::ReverseSorted.arrange(&base, 0.0, &mut rng);
        assert!(reversed.windows(2).all(|w| w[0] >= w[1]));

        let nearly = Scenario::NearlySorted.arrange(&base, 0.0, &mut rng);
        assert_eq!(nearly, sorted);
    }

    #[test]
    fn test_parse_scenario() {
        assert_eq!("random".parse(), Ok(Scenario::Random));
        assert_eq!("Nearly-Sorted".parse(), Ok(Scenario::NearlySorted));
        assert!("shuffled".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_time_sort_counts_comparisons() {
        let timing = time_sort(Scenario::Sorted, (0..1024).collect());
        assert_eq!(timing.size, 1024);
        assert!(timing.comparisons > 1024);
        assert!(timing.comparisons_per_nlogn() > 0.5);
    }

    #[test]
    fn test_time_queue_drains() {
        let mut rng = StdRng::seed_from_u64(3);
        let timing = time_queue(256, &mut rng);
        assert_eq!(timing.size, 256);
    }
}
