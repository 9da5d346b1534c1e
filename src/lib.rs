//! Linked Sort Bench
//!
//! Compares simple sorting algorithms across three linked containers and
//! times each one on the same random integer data.
//!
//! ## Containers
//!
//! - **LinkedList**: bubble, insertion (node relinking) and selection sort
//! - **Queue**: FIFO, bubble sort by draining into a buffer and refilling
//! - **Stack**: LIFO, same drain-sort, refilled in reverse so pops ascend
//!
//! ## Benchmark
//!
//! - Seeded dataset generation for reproducible runs
//! - Closure-based timing around each sort
//! - Plain timing lines, a summary table, or a JSON report

pub mod bench;
pub mod core;
pub mod structures;

// Re-exports
pub use bench::{BenchmarkReport, BenchmarkRunner, DatasetGenerator, SortCase, SortTiming};
pub use crate::core::config::{BenchConfig, ConfigError};
pub use structures::{ContainerError, ContainerResult, LinkedList, Queue, Stack};
