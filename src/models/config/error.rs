//! Configuration error types.
//!
//! This module defines the error type raised when a monitoring backend's
//! options fail validation.

use log::error;
use std::{error::Error, fmt};

/// Errors that can occur while validating monitoring configuration
#[derive(Debug)]
pub enum ConfigError {
	/// A backend section contained an unknown field or a value of the
	/// wrong type
	ValidationError {
		/// Top-level key of the offending backend section
		backend: String,
		/// What went wrong inside that section
		message: String,
	},
}

impl ConfigError {
	/// Format the error message for display
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError { backend, message } => {
				format!("Validation error in `{}` options: {}", backend, message)
			}
		}
	}

	/// Create a new validation error and log it
	pub fn validation_error(backend: impl Into<String>, message: impl Into<String>) -> Self {
		let error = Self::ValidationError {
			backend: backend.into(),
			message: message.into(),
		};
		error!("{}", error.format_message());
		error
	}

	/// Top-level key of the backend section that failed validation
	pub fn backend(&self) -> &str {
		match self {
			Self::ValidationError { backend, .. } => backend,
		}
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}
