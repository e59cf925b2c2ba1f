use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

mod error;
mod monitor_config;

pub use error::ConfigError;
pub use monitor_config::get_monitor_config;

/// Common interface for parsing a monitoring backend's options out of the
/// job configuration mapping
pub trait MonitorBackendConfig: Sized + Default + DeserializeOwned + Serialize {
    /// Top-level key of this backend's section in the job configuration
    const SECTION: &'static str;

    /// Fields this backend's section recognizes
    const FIELDS: &'static [&'static str];

    /// Whether this backend is switched on
    fn is_enabled(&self) -> bool;

    /// Parse this backend's section out of the outer job configuration
    /// mapping.
    ///
    /// An absent section yields the default options. A present section is
    /// validated strictly: unknown fields and values of the wrong type are
    /// rejected with an error naming the field and the backend.
    fn from_section(params: &Map<String, Value>) -> Result<Self, ConfigError> {
        let section = match params.get(Self::SECTION) {
            None => return Ok(Self::default()),
            Some(section) => section,
        };

        let fields = match section {
            Value::Object(fields) => fields,
            other => {
                return Err(ConfigError::validation_error(
                    Self::SECTION,
                    format!("expected a mapping of options, got {}", json_type_name(other)),
                ))
            }
        };

        for (key, value) in fields {
            if !Self::FIELDS.contains(&key.as_str()) {
                return Err(ConfigError::validation_error(
                    Self::SECTION,
                    format!("unknown field `{}`", key),
                ));
            }

            // Deserialize each field in isolation so type errors can name
            // the offending field; the container-level default fills in
            // the rest.
            let mut single = Map::new();
            single.insert(key.clone(), value.clone());
            if let Err(e) = serde_json::from_value::<Self>(Value::Object(single)) {
                return Err(ConfigError::validation_error(
                    Self::SECTION,
                    format!("invalid value for field `{}`: {}", key, e),
                ));
            }
        }

        serde_json::from_value(section.clone())
            .map_err(|e| ConfigError::validation_error(Self::SECTION, e.to_string()))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
