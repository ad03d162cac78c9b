//! Attribute map ⇄ model conversion
//!
//! Nested configuration blocks arrive as attribute maps. [`MapTo`] reads one
//! into a model, skipping empty strings and absent values; [`ToMap`] writes a
//! model back so it can be stored in resource state.

use std::collections::BTreeMap;

use sell_core::resource::{Attributes, Value};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// Errors raised while reading an attribute map into a model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("missing required value '{field}'")]
    MissingRequired { field: String },

    #[error("value '{field}' should be {expected}, got {got}")]
    InvalidType {
        field: String,
        expected: &'static str,
        got: String,
    },
}

impl ConvertError {
    fn invalid(field: &str, expected: &'static str, value: &Value) -> Self {
        Self::InvalidType {
            field: field.to_string(),
            expected,
            got: value.type_name(),
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Build a model from an attribute map
pub trait MapTo: Sized {
    fn map_to(map: &Attributes) -> ConvertResult<Self>;
}

/// Render a model as an attribute map
pub trait ToMap {
    fn to_map(&self) -> Attributes;
}

/// Render a model as a single-item block value
pub fn block_value<T: ToMap>(model: &T) -> Value {
    Value::block(model.to_map())
}

// =============================================================================
// Readers
// =============================================================================

/// Non-empty string at `key`
pub fn string(map: &Attributes, key: &str) -> ConvertResult<Option<String>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConvertError::invalid(key, "a string", other)),
    }
}

/// String at `key` that must be present
pub fn required_string(map: &Attributes, key: &str) -> ConvertResult<String> {
    match map.get(key) {
        None => Err(ConvertError::MissingRequired {
            field: key.to_string(),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ConvertError::invalid(key, "a string", other)),
    }
}

pub fn boolean(map: &Attributes, key: &str) -> ConvertResult<Option<bool>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ConvertError::invalid(key, "a bool", other)),
    }
}

pub fn float(map: &Attributes, key: &str) -> ConvertResult<Option<f64>> {
    match map.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ConvertError::invalid(key, "a number", value)),
    }
}

pub fn strings(map: &Attributes, key: &str) -> ConvertResult<Option<Vec<String>>> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    let items = value
        .as_list()
        .ok_or_else(|| ConvertError::invalid(key, "a list of strings", value))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ConvertError::invalid(key, "a list of strings", item))
        })
        .collect::<ConvertResult<Vec<String>>>()
        .map(Some)
}

/// String map at `key`; non-string values are skipped
pub fn string_map(map: &Attributes, key: &str) -> ConvertResult<Option<BTreeMap<String, String>>> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    let entries = value
        .as_map()
        .ok_or_else(|| ConvertError::invalid(key, "a map", value))?;
    Ok(Some(
        entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect(),
    ))
}

/// Free-form JSON object at `key`
pub fn json_map(map: &Attributes, key: &str) -> ConvertResult<Option<Map<String, JsonValue>>> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    match value.to_json() {
        JsonValue::Object(object) => Ok(Some(object)),
        _ => Err(ConvertError::invalid(key, "a map", value)),
    }
}

fn block_items<'a>(map: &'a Attributes, key: &str) -> ConvertResult<Option<&'a [Value]>> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    value
        .as_list()
        .map(Some)
        .ok_or_else(|| ConvertError::invalid(key, "a block", value))
}

/// First item of the block at `key`
pub fn block<T: MapTo>(map: &Attributes, key: &str) -> ConvertResult<Option<T>> {
    let Some(first) = block_items(map, key)?.and_then(|items| items.first()) else {
        return Ok(None);
    };
    let attrs = first
        .as_map()
        .ok_or_else(|| ConvertError::invalid(key, "a block", first))?;
    T::map_to(attrs).map(Some)
}

/// First item of the block at `key`, which must be present
pub fn required_block<T: MapTo>(map: &Attributes, key: &str) -> ConvertResult<T> {
    block(map, key)?.ok_or_else(|| ConvertError::MissingRequired {
        field: key.to_string(),
    })
}

/// Every item of the block list at `key`
pub fn blocks<T: MapTo>(map: &Attributes, key: &str) -> ConvertResult<Option<Vec<T>>> {
    let Some(items) = block_items(map, key)? else {
        return Ok(None);
    };
    items
        .iter()
        .map(|item| {
            let attrs = item
                .as_map()
                .ok_or_else(|| ConvertError::invalid(key, "a block", item))?;
            T::map_to(attrs)
        })
        .collect::<ConvertResult<Vec<T>>>()
        .map(Some)
}

// =============================================================================
// Writer
// =============================================================================

/// Builds an attribute map from model fields, leaving out unset ones
#[derive(Debug, Default)]
pub struct MapBuilder {
    attributes: Attributes,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn put(mut self, key: &str, value: Option<Value>) -> Self {
        if let Some(value) = value {
            self.attributes.insert(key.to_string(), value);
        }
        self
    }

    pub fn string(self, key: &str, value: &Option<String>) -> Self {
        self.put(key, value.clone().map(Value::String))
    }

    pub fn required_string(self, key: &str, value: &str) -> Self {
        self.put(key, Some(Value::String(value.to_string())))
    }

    pub fn boolean(self, key: &str, value: &Option<bool>) -> Self {
        self.put(key, value.map(Value::Bool))
    }

    pub fn float(self, key: &str, value: &Option<f64>) -> Self {
        self.put(key, value.map(Value::Float))
    }

    pub fn strings(self, key: &str, value: &Option<Vec<String>>) -> Self {
        self.put(key, value.as_ref().map(|items| Value::strings(items.iter().cloned())))
    }

    pub fn string_map(self, key: &str, value: &Option<BTreeMap<String, String>>) -> Self {
        self.put(
            key,
            value.as_ref().map(|entries| {
                Value::Map(
                    entries
                        .iter()
                        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                        .collect(),
                )
            }),
        )
    }

    pub fn json_map(self, key: &str, value: &Option<Map<String, JsonValue>>) -> Self {
        self.put(
            key,
            value
                .as_ref()
                .and_then(|object| Value::from_json(&JsonValue::Object(object.clone()))),
        )
    }

    pub fn block<T: ToMap>(self, key: &str, value: &Option<T>) -> Self {
        self.put(key, value.as_ref().map(block_value))
    }

    pub fn blocks<T: ToMap>(self, key: &str, value: &Option<Vec<T>>) -> Self {
        self.put(
            key,
            value
                .as_ref()
                .map(|items| Value::List(items.iter().map(|i| Value::Map(i.to_map())).collect())),
        )
    }

    pub fn build(self) -> Attributes {
        self.attributes
    }
}
