//! Configuration loading.
//!
//! Config files are strict JSON or YAML. YAML values are bridged to the
//! JSON data model before normalization, with integer and boolean mapping
//! keys stringified so `18: 4.5rem` behaves like `"18": "4.5rem"`.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported mapping key in config: {0}")]
    UnsupportedKey(String),

    #[error("config is neither valid JSON ({json}) nor valid YAML ({yaml})")]
    Undetected { json: String, yaml: String },
}

/// A supported configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Infers the format from a file extension. Returns `None` for
    /// unknown extensions, in which case the loader sniffs the content.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// Parses configuration text into a JSON value tree.
///
/// With an explicit format the matching parser is used directly. Without
/// one, JSON is tried first and YAML second; if both fail, the error
/// carries both parser messages.
pub fn load_config(text: &str, format: Option<ConfigFormat>) -> Result<Value, ConfigError> {
    match format {
        Some(ConfigFormat::Json) => Ok(serde_json::from_str(text)?),
        Some(ConfigFormat::Yaml) => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
            yaml_to_json(&yaml)
        }
        None => {
            let json_err = match serde_json::from_str(text) {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            let yaml_err = match serde_yaml::from_str::<serde_yaml::Value>(text) {
                Ok(yaml) => return yaml_to_json(&yaml),
                Err(err) => err,
            };
            Err(ConfigError::Undetected {
                json: json_err.to_string(),
                yaml: yaml_err.to_string(),
            })
        }
    }
}

fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, ConfigError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => Ok(serde_json::to_value(n)?),
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(items) => {
            let mut array = Vec::with_capacity(items.len());
            for item in items {
                array.push(yaml_to_json(item)?);
            }
            Ok(Value::Array(array))
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(ConfigError::UnsupportedKey(format!("{:?}", other)));
                    }
                };
                map.insert(key, yaml_to_json(value)?);
            }
            Ok(Value::Object(map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}
