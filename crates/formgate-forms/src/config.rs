//! Controller configuration
//!
//! ```toml
//! validate_on_change = true
//! redact_secrets = false
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Failed to read configuration file {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("Invalid form configuration: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Runtime policy of a [`FormController`](crate::FormController)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	/// Recompute the error map after every edit instead of only on submit
	pub validate_on_change: bool,
	/// Mask values of password fields in log output
	pub redact_secrets: bool,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			validate_on_change: false,
			redact_secrets: true,
		}
	}
}

impl FormConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_validate_on_change(mut self, enabled: bool) -> Self {
		self.validate_on_change = enabled;
		self
	}

	pub fn with_redact_secrets(mut self, enabled: bool) -> Self {
		self.redact_secrets = enabled;
		self
	}

	/// Parse a configuration from TOML text
	///
	/// # Examples
	///
	/// ```
	/// use formgate_forms::FormConfig;
	///
	/// let config = FormConfig::from_toml_str("validate_on_change = true").unwrap();
	/// assert!(config.validate_on_change);
	/// assert!(config.redact_secrets);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Load a configuration from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.display().to_string(),
			source,
		})?;
		let config = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), ?config, "form configuration loaded");
		Ok(config)
	}
}
