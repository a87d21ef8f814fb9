//! YAML configuration loading

use super::validate::ensure_path;
use crate::config_box::ConfigBox;
use crate::error::{Error, Result};
use serde_yaml::Value as YamlValue;
use std::path::Path;

/// Read a YAML file into a [`ConfigBox`]
///
/// Fails with [`Error::EmptyDocument`] when the file is blank, holds only
/// comments, or parses to `null` or `{}`, and with [`Error::NotAMapping`]
/// when the top level is a scalar or a sequence.
pub fn read_yaml(path: impl AsRef<Path>) -> Result<ConfigBox> {
    let path = path.as_ref();
    ensure_path("path", path)?;

    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    if is_blank(&content) {
        return Err(Error::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let document: YamlValue = serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping = match document {
        YamlValue::Null => {
            return Err(Error::EmptyDocument {
                path: path.to_path_buf(),
            });
        }
        YamlValue::Mapping(mapping) if mapping.is_empty() => {
            return Err(Error::EmptyDocument {
                path: path.to_path_buf(),
            });
        }
        YamlValue::Mapping(mapping) => mapping,
        other => {
            return Err(Error::NotAMapping {
                path: path.to_path_buf(),
                found: yaml_kind(&other),
            });
        }
    };

    for (key, value) in &mapping {
        ensure_finite(path, &key_name(key), value)?;
    }

    let value = serde_json::to_value(&mapping).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ConfigBox::try_from(value)?;

    log::info!("yaml file: {} loaded successfully", path.display());
    Ok(config)
}

/// Reject `.inf` and `.nan`, which would otherwise turn into `null`
fn ensure_finite(path: &Path, key: &str, value: &YamlValue) -> Result<()> {
    match value {
        YamlValue::Number(n) if n.as_f64().is_some_and(|f| !f.is_finite()) => {
            Err(Error::NonFiniteNumber {
                path: path.to_path_buf(),
                key: key.to_string(),
            })
        }
        YamlValue::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| ensure_finite(path, &format!("{}.{}", key, i), item)),
        YamlValue::Mapping(mapping) => mapping.iter().try_for_each(|(k, v)| {
            ensure_finite(path, &format!("{}.{}", key, key_name(k)), v)
        }),
        YamlValue::Tagged(tagged) => ensure_finite(path, key, &tagged.value),
        _ => Ok(()),
    }
}

fn key_name(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        other => yaml_kind(other).to_string(),
    }
}

/// No content besides whitespace and comment lines
fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}
