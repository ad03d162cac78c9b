//! Configuration documents
//!
//! A document is a JSON file listing the onboarding resources to check:
//!
//! ```json
//! {
//!   "provider": { "env": "current" },
//!   "resources": [
//!     {
//!       "type": "ibm_onboarding_product",
//!       "name": "pet_store",
//!       "identifier": "a1b2c3",
//!       "attributes": { "type": "software" },
//!       "prior": { "type": "software" }
//!     }
//!   ]
//! }
//! ```
//!
//! Blocks may be written as a single object instead of a list of objects.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use sell_core::resource::{Attributes, Resource, ResourceId, State, Value, attributes_from_json};
use sell_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Duplicate resource: {0}")]
    DuplicateResource(ResourceId),
}

/// Provider settings shared by every resource in a document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Environment used when a resource does not set `env`
    pub env: Option<String>,
}

/// One declared resource
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    /// Composite identifier of the existing resource
    pub identifier: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, JsonValue>,
    /// Last known attributes of the existing resource
    pub prior: Option<Map<String, JsonValue>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Reject two resources sharing a type and name
    pub fn check_unique(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for resource in &self.resources {
            let id = resource.id();
            if !seen.insert(id.clone()) {
                return Err(ConfigError::DuplicateResource(id));
            }
        }
        Ok(())
    }
}

impl ResourceConfig {
    pub fn id(&self) -> ResourceId {
        ResourceId::new(&self.resource_type, &self.name)
    }

    /// Desired resource, with blocks shaped by `schema` when one is known
    pub fn to_resource(&self, schema: Option<&ResourceSchema>) -> Resource {
        Resource {
            id: self.id(),
            attributes: shaped(&self.attributes, schema),
        }
    }

    /// Existing state, if the resource names both an identifier and prior attributes
    pub fn prior_state(&self, schema: Option<&ResourceSchema>) -> Option<State> {
        let identifier = self.identifier.as_deref().filter(|i| !i.is_empty())?;
        let prior = self.prior.as_ref()?;
        Some(State::existing(self.id(), shaped(prior, schema)).with_identifier(identifier))
    }
}

fn shaped(object: &Map<String, JsonValue>, schema: Option<&ResourceSchema>) -> Attributes {
    let attributes = attributes_from_json(object);
    match schema {
        Some(schema) => normalize_blocks(attributes, &schema.attributes),
        None => attributes,
    }
}

/// Wrap object-valued blocks into single-item lists, at every depth
pub fn normalize_blocks(
    attributes: Attributes,
    schemas: &HashMap<String, AttributeSchema>,
) -> Attributes {
    attributes
        .into_iter()
        .map(|(key, value)| {
            let value = match schemas.get(&key).map(|s| &s.attr_type) {
                Some(AttributeType::Block(block)) => {
                    let items = match value {
                        Value::Map(item) => vec![Value::Map(item)],
                        Value::List(items) => items,
                        other => return (key, other),
                    };
                    Value::List(
                        items
                            .into_iter()
                            .map(|item| match item {
                                Value::Map(item) => {
                                    Value::Map(normalize_blocks(item, &block.attributes))
                                }
                                other => other,
                            })
                            .collect(),
                    )
                }
                _ => value,
            };
            (key, value)
        })
        .collect()
}
