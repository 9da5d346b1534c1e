//! Sort timing results and report output

use serde::Serialize;
use std::time::Duration;

use super::runner::SortCase;

/// Timing for one sort case over all iterations
#[derive(Debug, Clone, Serialize)]
pub struct SortTiming {
    pub case: SortCase,
    pub container: String,
    pub sort: String,
    pub elements: usize,
    pub iterations: usize,
    /// Duration of the final iteration, the figure printed per line
    pub last_us: u64,
    pub min_us: u64,
    pub max_us: u64,
    pub avg_us: f64,
    /// Container contents after the final sort, when printing is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,
}

impl SortTiming {
    pub fn from_samples(case: SortCase, elements: usize, samples: &[Duration]) -> Self {
        let micros: Vec<u64> = samples.iter().map(|d| d.as_micros() as u64).collect();
        let min = micros.iter().min().copied().unwrap_or(0);
        let max = micros.iter().max().copied().unwrap_or(0);
        let avg = if !micros.is_empty() {
            micros.iter().sum::<u64>() as f64 / micros.len() as f64
        } else {
            0.0
        };

        Self {
            case,
            container: case.container_name().to_string(),
            sort: case.sort_name().to_string(),
            elements,
            iterations: micros.len(),
            last_us: micros.last().copied().unwrap_or(0),
            min_us: min,
            max_us: max,
            avg_us: avg,
            values: None,
        }
    }

    /// `<ContainerName> - <SortName> time: <microseconds> microseconds`
    pub fn line(&self) -> String {
        format!(
            "{} - {} time: {} microseconds",
            self.container, self.sort, self.last_us
        )
    }
}

/// Results of one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub seed: Option<u64>,
    pub element_count: usize,
    pub generated_at: String,
    pub timings: Vec<SortTiming>,
}

impl BenchmarkReport {
    pub fn new(seed: Option<u64>, element_count: usize, timings: Vec<SortTiming>) -> Self {
        Self {
            seed,
            element_count,
            generated_at: chrono::Local::now().to_rfc3339(),
            timings,
        }
    }

    /// One timing line per sort, followed by the sorted values when captured.
    pub fn print_lines(&self) {
        for timing in &self.timings {
            println!("{}", timing.line());
            if let Some(values) = &timing.values {
                println!("{}", values);
            }
        }
    }

    /// Print formatted results
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(64));
        println!("SORT BENCHMARK SUMMARY ({} elements)", self.element_count);
        if let Some(seed) = self.seed {
            println!("Seed: {}", seed);
        }
        println!("{}", "=".repeat(64));

        println!(
            "{:<12} {:<16} {:>8} {:>10} {:>8} {:>8}",
            "Container", "Sort", "Runs", "Avg (µs)", "Min", "Max"
        );
        println!("{}", "-".repeat(64));
        for t in &self.timings {
            println!(
                "{:<12} {:<16} {:>8} {:>10.2} {:>8} {:>8}",
                t.container, t.sort, t.iterations, t.avg_us, t.min_us, t.max_us
            );
        }

        if let Some(fastest) = self.fastest() {
            println!("\nFastest: {} - {} ({:.2}µs avg)", fastest.container, fastest.sort, fastest.avg_us);
        }
    }

    /// Case with the lowest average time
    pub fn fastest(&self) -> Option<&SortTiming> {
        self.timings
            .iter()
            .min_by(|a, b| a.avg_us.total_cmp(&b.avg_us))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_line_format() {
        let timing = SortTiming::from_samples(
            SortCase::QueueBubble,
            100,
            &[Duration::from_micros(40), Duration::from_micros(12)],
        );
        assert_eq!(timing.line(), "Queue - Bubble Sort time: 12 microseconds");
        assert_eq!(timing.min_us, 12);
        assert_eq!(timing.max_us, 40);
        assert_eq!(timing.avg_us, 26.0);
        assert_eq!(timing.iterations, 2);
    }

    #[test]
    fn test_empty_samples() {
        let timing = SortTiming::from_samples(SortCase::ListBubble, 0, &[]);
        assert_eq!(timing.last_us, 0);
        assert_eq!(timing.avg_us, 0.0);
    }

    #[test]
    fn test_report_json_and_fastest() {
        let report = BenchmarkReport::new(
            Some(1),
            10,
            vec![
                SortTiming::from_samples(SortCase::ListBubble, 10, &[Duration::from_micros(30)]),
                SortTiming::from_samples(SortCase::StackBubble, 10, &[Duration::from_micros(5)]),
            ],
        );
        assert_eq!(report.fastest().map(|t| t.case), Some(SortCase::StackBubble));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["seed"], 1);
        assert_eq!(json["timings"][0]["container"], "LinkedList");
        assert_eq!(json["timings"][1]["case"], "StackBubble");
        assert!(json["timings"][0].get("values").is_none());
    }
}
