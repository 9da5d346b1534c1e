//! Core benchmark settings

pub mod config;

pub use config::{BenchConfig, ConfigError};
