//! Monitor configuration parsing and validation.
//!
//! This module implements the MonitorBackendConfig trait for the three
//! backend option types and exposes the builder that assembles the
//! aggregate configuration from a job's configuration mapping.

use serde_json::{Map, Value};

use crate::models::{
	config::{error::ConfigError, MonitorBackendConfig},
	CsvConfig, MonitorConfig, TensorboardConfig, WandbConfig,
};

impl MonitorBackendConfig for TensorboardConfig {
	const SECTION: &'static str = "tensorboard";
	const FIELDS: &'static [&'static str] = &["enabled", "output_path", "job_name"];

	fn is_enabled(&self) -> bool {
		self.enabled
	}
}

impl MonitorBackendConfig for WandbConfig {
	const SECTION: &'static str = "wandb";
	const FIELDS: &'static [&'static str] = &["enabled", "group", "team", "project"];

	fn is_enabled(&self) -> bool {
		self.enabled
	}
}

impl MonitorBackendConfig for CsvConfig {
	const SECTION: &'static str = "csv_monitor";
	const FIELDS: &'static [&'static str] = &["enabled", "output_path", "job_name"];

	fn is_enabled(&self) -> bool {
		self.enabled
	}
}

/// Build the aggregate monitoring configuration from a job configuration
/// mapping.
///
/// Each of the three recognized backend sections is extracted (absent
/// sections take full defaults) and validated strictly. Top-level keys
/// other than the three backend sections belong to the surrounding job
/// schema and are ignored here.
pub fn get_monitor_config(params: &Map<String, Value>) -> Result<MonitorConfig, ConfigError> {
	Ok(MonitorConfig {
		tensorboard: TensorboardConfig::from_section(params)?,
		wandb: WandbConfig::from_section(params)?,
		csv_monitor: CsvConfig::from_section(params)?,
	})
}
