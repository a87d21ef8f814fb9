//! Read-only, attribute-accessible mapping
//!
//! [`ConfigBox`] is what the YAML and JSON loaders hand back. Fields can be
//! reached by key, by dotted path (`"training.optimizer.lr"`), or projected
//! into a typed struct through `serde`.

use crate::error::{Error, Result, kind_of};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::Index;

static NULL: Value = Value::Null;

/// A parsed document whose top level is a mapping
///
/// # Example
///
/// ```
/// use artifact_io::ConfigBox;
/// use serde_json::json;
///
/// let config = ConfigBox::try_from(json!({
///     "model": {"name": "vgg16", "layers": [{"units": 128}]}
/// }))
/// .unwrap();
///
/// assert_eq!(config.path("model.name"), Some(&json!("vgg16")));
/// assert_eq!(config.path("model.layers.0.units"), Some(&json!(128)));
/// assert_eq!(config.get_as::<u32>("model.layers.0.units").unwrap(), 128);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigBox {
    fields: Map<String, Value>,
}

impl ConfigBox {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by dotted path
    ///
    /// Each segment selects a key of a mapping, or an index when the current
    /// value is a sequence and the segment parses as a number.
    pub fn path(&self, dotted: &str) -> Option<&Value> {
        let mut segments = dotted.split('.');
        let mut current = self.fields.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Nested mapping under `key` as its own box
    pub fn section(&self, key: &str) -> Option<ConfigBox> {
        match self.path(key)? {
            Value::Object(map) => Some(Self {
                fields: map.clone(),
            }),
            _ => None,
        }
    }

    /// Typed view of a single field
    pub fn get_as<T: DeserializeOwned>(&self, dotted: &str) -> Result<T> {
        let value = self
            .path(dotted)
            .ok_or_else(|| Error::type_mismatch(dotted, "a present field", "nothing"))?;

        serde_json::from_value(value.clone()).map_err(|e| {
            log::debug!("Field {} did not match {}: {}", dotted, std::any::type_name::<T>(), e);
            Error::type_mismatch(dotted, std::any::type_name::<T>(), kind_of(value))
        })
    }

    /// Typed view of the whole document
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            Error::type_mismatch("document", std::any::type_name::<T>(), e.to_string())
        })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl TryFrom<Value> for ConfigBox {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::type_mismatch("value", "mapping", kind_of(&other))),
        }
    }
}

impl From<Map<String, Value>> for ConfigBox {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl Index<&str> for ConfigBox {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }
}

impl<'a> IntoIterator for &'a ConfigBox {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for ConfigBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = serde_json::to_string_pretty(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&pretty)
    }
}
