//! Typed access to an untyped tool argument map.

use serde_json::{Map, Value};

use crate::types::{Error, Result};

/// Arguments of one tool call.
///
/// A missing or non-object argument value is an empty map, and `null`
/// entries count as absent.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    args: Map<String, Value>,
}

impl ToolArguments {
    pub fn from_value(value: Option<&Value>) -> Self {
        let args = value
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Self { args }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.args
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.args
    }

    fn field(&self, key: &str) -> Result<&Value> {
        self.args
            .get(key)
            .ok_or_else(|| Error::invalid_arguments(format!("Missing required parameter: {}", key)))
    }

    pub fn string(&self, key: &str) -> Result<String> {
        self.field(key)?
            .as_str()
            .map(String::from)
            .ok_or_else(|| Error::invalid_arguments(format!("Parameter '{}' must be a string", key)))
    }

    pub fn string_list(&self, key: &str) -> Result<Vec<String>> {
        let items = self.field(key)?.as_array().ok_or_else(|| {
            Error::invalid_arguments(format!("Parameter '{}' must be an array of strings", key))
        })?;
        items
            .iter()
            .map(|item| {
                item.as_str().map(String::from).ok_or_else(|| {
                    Error::invalid_arguments(format!(
                        "Parameter '{}' must be an array of strings",
                        key
                    ))
                })
            })
            .collect()
    }

    pub fn count(&self, key: &str) -> Result<u64> {
        self.field(key)?.as_u64().ok_or_else(|| {
            Error::invalid_arguments(format!("Parameter '{}' must be a non-negative integer", key))
        })
    }
}
