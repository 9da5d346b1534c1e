//! Linked Sort Bench - times bubble, insertion and selection sort on
//! linked lists, queues and stacks.
//!
//! Run without arguments for the fixed 100-element benchmark.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use linked_sort_bench::{BenchConfig, BenchmarkRunner};

#[derive(Parser)]
#[command(name = "linked-sort-bench")]
#[command(about = "Benchmark simple sorts on linked containers", long_about = None)]
struct Cli {
    /// Load settings from a TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of random values per dataset
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Exclusive upper bound for generated values
    #[arg(long)]
    max_value: Option<i32>,

    /// Seed for reproducible datasets
    #[arg(short, long)]
    seed: Option<u64>,

    /// Timed repetitions per sort
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Print container contents after sorting
    #[arg(short, long)]
    print: bool,

    /// Emit the report as JSON instead of timing lines
    #[arg(long)]
    json: bool,

    /// Show a summary table after the timing lines
    #[arg(long)]
    summary: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<BenchConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };

        if let Some(count) = self.count {
            config.element_count = count;
        }
        if let Some(max_value) = self.max_value {
            config.max_value = max_value;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if self.print {
            config.print_values = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Log level used when `RUST_LOG` is unset.
fn default_log_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the timing lines
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(cli.verbose)));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.resolve_config()?;
    info!("Running sort benchmark with {:?}", config);

    let runner = BenchmarkRunner::new(config);
    let report = runner.run()?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        report.print_lines();
        if cli.summary {
            report.print_summary();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directive() {
        assert_eq!(default_log_directive(false), "warn");
        assert_eq!(default_log_directive(true), "debug");
        assert!(EnvFilter::try_new(default_log_directive(true)).is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["linked-sort-bench", "-n", "20", "--seed", "3", "--print"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.element_count, 20);
        assert_eq!(config.seed, Some(3));
        assert!(config.print_values);
        assert_eq!(config.max_value, 10_000);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::parse_from(["linked-sort-bench", "--iterations", "0"]);
        assert!(cli.resolve_config().is_err());
    }
}
