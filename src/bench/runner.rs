//! Benchmark runner for the container sorts

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::dataset::DatasetGenerator;
use super::metrics::{BenchmarkReport, SortTiming};
use crate::core::config::BenchConfig;
use crate::structures::{ContainerResult, LinkedList, Queue, Stack};

/// One container/sort pairing of the benchmark plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortCase {
    ListBubble,
    ListInsertion,
    ListSelection,
    QueueBubble,
    StackBubble,
}

impl SortCase {
    /// Run order of the fixed benchmark
    pub const ALL: [SortCase; 5] = [
        SortCase::ListBubble,
        SortCase::ListInsertion,
        SortCase::ListSelection,
        SortCase::QueueBubble,
        SortCase::StackBubble,
    ];

    pub fn container_name(&self) -> &'static str {
        match self {
            SortCase::ListBubble | SortCase::ListInsertion | SortCase::ListSelection => "LinkedList",
            SortCase::QueueBubble => "Queue",
            SortCase::StackBubble => "Stack",
        }
    }

    pub fn sort_name(&self) -> &'static str {
        match self {
            SortCase::ListBubble | SortCase::QueueBubble | SortCase::StackBubble => "Bubble Sort",
            SortCase::ListInsertion => "Insertion Sort",
            SortCase::ListSelection => "Selection Sort",
        }
    }
}

/// Time a single synchronous call.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Outcome of sorting one fresh container
struct SortRun {
    elapsed: Duration,
    sorted: bool,
    rendered: String,
}

pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Generate the dataset from config and run every case on copies of it.
    pub fn run(&self) -> ContainerResult<BenchmarkReport> {
        let mut generator = DatasetGenerator::new(self.config.seed, self.config.max_value);
        let data = generator.generate(self.config.element_count);
        info!(
            "Generated {} values (seed {:?}, max {})",
            data.len(),
            generator.seed(),
            self.config.max_value
        );

        let timings = self.run_all(&data)?;
        Ok(BenchmarkReport::new(generator.seed(), data.len(), timings))
    }

    pub fn run_all(&self, data: &[i32]) -> ContainerResult<Vec<SortTiming>> {
        SortCase::ALL
            .iter()
            .map(|&case| self.run_case(case, data))
            .collect()
    }

    /// Sort `iterations` fresh copies of `data` with one case.
    pub fn run_case(&self, case: SortCase, data: &[i32]) -> ContainerResult<SortTiming> {
        let iterations = self.config.iterations.max(1);
        let mut samples = Vec::with_capacity(iterations);
        let mut rendered = String::new();

        for iteration in 0..iterations {
            let run = Self::sort_once(case, data)?;
            if !run.sorted {
                warn!(
                    "{} - {} left values out of order",
                    case.container_name(),
                    case.sort_name()
                );
            }
            debug!(
                "{} - {} iteration {}: {:?}",
                case.container_name(),
                case.sort_name(),
                iteration,
                run.elapsed
            );
            samples.push(run.elapsed);
            rendered = run.rendered;
        }

        let mut timing = SortTiming::from_samples(case, data.len(), &samples);
        if self.config.print_values {
            timing.values = Some(rendered);
        }
        Ok(timing)
    }

    /// Build the case's container from `data`, then time only the sort.
    fn sort_once(case: SortCase, data: &[i32]) -> ContainerResult<SortRun> {
        match case {
            SortCase::ListBubble => Ok(Self::sort_list(data, LinkedList::bubble_sort)),
            SortCase::ListInsertion => Ok(Self::sort_list(data, LinkedList::insertion_sort)),
            SortCase::ListSelection => Ok(Self::sort_list(data, LinkedList::selection_sort)),
            SortCase::QueueBubble => {
                let mut queue: Queue<i32> = data.iter().copied().collect();
                let (result, elapsed) = measure(|| queue.bubble_sort());
                result?;
                Ok(SortRun {
                    elapsed,
                    sorted: is_non_decreasing(queue.iter()),
                    rendered: queue.render(),
                })
            }
            SortCase::StackBubble => {
                let mut stack: Stack<i32> = data.iter().copied().collect();
                let (result, elapsed) = measure(|| stack.bubble_sort());
                result?;
                Ok(SortRun {
                    elapsed,
                    sorted: is_non_decreasing(stack.iter()),
                    rendered: stack.render(),
                })
            }
        }
    }

    fn sort_list(data: &[i32], sort: fn(&mut LinkedList<i32>)) -> SortRun {
        let mut list: LinkedList<i32> = data.iter().copied().collect();
        let ((), elapsed) = measure(|| sort(&mut list));
        SortRun {
            elapsed,
            sorted: list.is_sorted(),
            rendered: list.render(),
        }
    }
}

fn is_non_decreasing<'a, T: PartialOrd + 'a>(values: impl Iterator<Item = &'a T>) -> bool {
    let mut previous: Option<&T> = None;
    for value in values {
        if previous.map_or(false, |p| p > value) {
            return false;
        }
        previous = Some(value);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(iterations: usize, print_values: bool) -> BenchmarkRunner {
        BenchmarkRunner::new(BenchConfig {
            element_count: 50,
            seed: Some(2024),
            iterations,
            print_values,
            ..Default::default()
        })
    }

    #[test]
    fn test_case_names() {
        assert_eq!(SortCase::ListInsertion.container_name(), "LinkedList");
        assert_eq!(SortCase::ListInsertion.sort_name(), "Insertion Sort");
        assert_eq!(SortCase::StackBubble.container_name(), "Stack");
        assert_eq!(SortCase::QueueBubble.sort_name(), "Bubble Sort");
    }

    #[test]
    fn test_measure_returns_result() {
        let (value, elapsed) = measure(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_every_case_sorts_same_data() {
        let data = vec![5, 3, 1, 4, 2];
        let timings = runner(1, true).run_all(&data).unwrap();
        assert_eq!(timings.len(), SortCase::ALL.len());
        for timing in &timings {
            assert_eq!(timing.elements, 5);
            assert_eq!(timing.values.as_deref(), Some("1 2 3 4 5 "), "{}", timing.line());
        }
    }

    #[test]
    fn test_iterations_recorded() {
        let timing = runner(3, false)
            .run_case(SortCase::ListSelection, &[9, 8, 7])
            .unwrap();
        assert_eq!(timing.iterations, 3);
        assert!(timing.min_us <= timing.max_us);
        assert!(timing.values.is_none());
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let first = runner(1, true).run().unwrap();
        let second = runner(1, true).run().unwrap();
        assert_eq!(first.seed, Some(2024));
        assert_eq!(first.element_count, 50);
        let values = |r: &BenchmarkReport| -> Vec<Option<String>> {
            r.timings.iter().map(|t| t.values.clone()).collect()
        };
        assert_eq!(values(&first), values(&second));
    }

    #[test]
    fn test_empty_dataset() {
        let timings = runner(1, true).run_all(&[]).unwrap();
        assert!(timings.iter().all(|t| t.values.as_deref() == Some("")));
    }

    #[test]
    fn test_is_non_decreasing() {
        assert!(is_non_decreasing([1, 1, 2].iter()));
        assert!(is_non_decreasing(std::iter::empty::<&i32>()));
        assert!(!is_non_decreasing([2, 1].iter()));
    }
}
