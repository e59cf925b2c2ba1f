//! Monitoring configuration for distributed training jobs.
//!
//! This crate defines the configuration schemas for the optional
//! experiment-monitoring backends of a training job:
//!
//! - TensorBoard: event files for metrics visualization
//! - WandB: a hosted experiment-tracking service
//! - CSV: local flat-file tabular logging
//!
//! It is a passive validation-and-defaults layer: the backend writer
//! clients that actually emit monitoring data live elsewhere and consume
//! the validated [`models::MonitorConfig`] produced here.
//!
//! # Flow
//! 1. The job's configuration file is parsed into a JSON mapping by the
//!    surrounding configuration loader
//! 2. [`models::get_monitor_config`] extracts the three recognized backend
//!    sections, applies field defaults and validates them strictly
//! 3. Backend clients inspect the resulting [`models::MonitorConfig`] to
//!    decide whether to activate and how to name their output

pub mod models;

pub use models::{
	get_monitor_config, ConfigError, CsvConfig, MonitorBackendConfig, MonitorConfig,
	TensorboardConfig, WandbConfig,
};
