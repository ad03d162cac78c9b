//! ResourceData - Typed access to a resource's prior state and planned configuration
//!
//! Handlers read the planned configuration with dotted paths
//! (`metadata.0.ui.0.hidden`), ask whether a path changed since the prior
//! state, and write service responses back with [`ResourceData::set`].

use std::collections::HashMap;

use crate::resource::{Attributes, Resource, ResourceId, State, Value};

/// Working copy of one resource during a CRUD operation
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData {
    id: String,
    prior: Attributes,
    planned: Attributes,
}

impl ResourceData {
    /// Data for a resource that does not exist yet
    pub fn new(planned: Attributes) -> Self {
        Self {
            id: String::new(),
            prior: HashMap::new(),
            planned,
        }
    }

    /// Data for an existing resource moving from `prior` to `planned`
    pub fn with_prior(id: impl Into<String>, prior: Attributes, planned: Attributes) -> Self {
        Self {
            id: id.into(),
            prior,
            planned,
        }
    }

    /// Data for an existing resource with no pending change
    pub fn existing(id: impl Into<String>, attributes: Attributes) -> Self {
        Self::with_prior(id, attributes.clone(), attributes)
    }

    /// Data for an update from a stored state to a desired resource
    pub fn for_update(identifier: &str, from: &State, to: &Resource) -> Self {
        Self::with_prior(identifier, from.attributes.clone(), to.attributes.clone())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the resource ID; an empty ID marks the resource as gone
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Whether the resource is still tracked
    pub fn is_tracked(&self) -> bool {
        !self.id.is_empty()
    }

    /// Value at `path` in the planned configuration
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.planned, path)
    }

    /// Value at `path` when it is set to a non-zero value
    pub fn get_ok(&self, path: &str) -> Option<&Value> {
        self.get(path).filter(|v| !v.is_zero())
    }

    /// Whether the value at `path` differs between prior state and plan
    ///
    /// An absent value and a zero value compare equal, and so do an
    /// integer and a float of the same value.
    pub fn has_change(&self, path: &str) -> bool {
        let before = lookup(&self.prior, path).filter(|v| !v.is_zero());
        match (before, self.get_ok(path)) {
            (None, None) => false,
            (Some(before), Some(after)) => !before.same_as(after),
            _ => true,
        }
    }

    /// Write a top-level attribute
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.planned.insert(key.into(), value);
    }

    /// String at `path`, empty when unset
    pub fn get_string(&self, path: &str) -> String {
        self.get(path)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Non-empty string at `path`
    pub fn get_string_ok(&self, path: &str) -> Option<String> {
        self.get_ok(path)
            .and_then(Value::as_str)
            .map(|s| s.to_string())
    }

    /// Bool at `path`, false when unset
    pub fn get_bool(&self, path: &str) -> bool {
        self.get(path).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Number at `path`
    pub fn get_float_ok(&self, path: &str) -> Option<f64> {
        self.get_ok(path).and_then(Value::as_f64)
    }

    /// Strings of the list at `path`; non-string items are skipped
    pub fn get_string_list(&self, path: &str) -> Vec<String> {
        self.get(path)
            .and_then(Value::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Attribute map of the block at `path` (e.g., `metadata.0`)
    pub fn get_block(&self, path: &str) -> Option<&Attributes> {
        self.get(path).and_then(Value::as_map)
    }

    /// Current attribute map
    pub fn attributes(&self) -> &Attributes {
        &self.planned
    }

    /// Finish the operation as a state snapshot
    pub fn into_state(self, id: ResourceId) -> State {
        if self.id.is_empty() {
            State::not_found(id)
        } else {
            let identifier = self.id;
            State::existing(id, self.planned).with_identifier(identifier)
        }
    }
}

/// Resolve a dotted path inside an attribute map
///
/// Numeric segments index into lists; other segments select map keys.
pub fn lookup<'a>(attributes: &'a Attributes, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = attributes.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::List(items) => items.get(segment.parse::<usize>().ok()?)?,
            Value::Map(map) => map.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}
