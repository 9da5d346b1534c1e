//! Sort benchmark suite
//!
//! Every case sorts its own copy of one random dataset:
//! - LinkedList: bubble, insertion and selection sort
//! - Queue: drain-sort bubble sort
//! - Stack: drain-sort bubble sort

pub mod dataset;
pub mod metrics;
pub mod runner;

pub use dataset::DatasetGenerator;
pub use metrics::{BenchmarkReport, SortTiming};
pub use runner::{measure, BenchmarkRunner, SortCase};
