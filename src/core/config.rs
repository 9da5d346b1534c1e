//! Configuration for the sort benchmark

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Errors from loading, saving or validating a [`BenchConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    Io(std::io::Error),
    /// File content is not valid TOML for this config
    Parse(toml::de::Error),
    /// Config could not be rendered as TOML
    Serialize(toml::ser::Error),
    /// A field holds a value the benchmark cannot run with
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Config serialize error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Values generated per dataset
    pub element_count: usize,

    /// Exclusive upper bound for generated values (values are `0..max_value`)
    pub max_value: i32,

    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Timed repetitions per sort, each on a fresh copy of the dataset
    pub iterations: usize,

    /// Print each container after it has been sorted
    pub print_values: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            element_count: 100,
            max_value: 10_000,
            seed: None,
            iterations: 1,
            print_values: false,
        }
    }
}

impl BenchConfig {
    /// Load config from TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max_value must be positive, got {}",
                self.max_value
            )));
        }
        if self.iterations == 0 {
            return Err(ConfigError::Invalid("iterations must be at least 1".into()));
        }
        Ok(())
    }
}
