//! Data structures for monitoring configuration.
//!
//! - `config`: Configuration parsing and validation
//! - `core`: Core option models (TensorBoard, WandB, CSV and the aggregate)

mod config;
mod core;

// Re-export core types
pub use core::{CsvConfig, MonitorConfig, TensorboardConfig, WandbConfig};

// Re-export config types
pub use config::{get_monitor_config, ConfigError, MonitorBackendConfig};
