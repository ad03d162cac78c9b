//! Resource - Representing resources and their state

use std::collections::HashMap;
use std::fmt;

/// Attribute map of a resource or of one nested block
pub type Attributes = HashMap<String, Value>;

/// Unique identifier for a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    /// Resource type (e.g., "ibm_onboarding_catalog_plan")
    pub resource_type: String,
    /// Resource name (label given in configuration)
    pub name: String,
}

impl ResourceId {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource_type, self.name)
    }
}

/// Attribute value of a resource
///
/// Nested blocks are lists of maps, even when at most one item is allowed,
/// so `metadata.0.ui.0.hidden` addresses a leaf inside two single blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

impl Value {
    /// Returns true for the zero value of the variant
    pub fn is_zero(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::Bool(b) => !*b,
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view; integers widen to floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Equality that compares integers and floats by numeric value
    ///
    /// Configuration parses `43230000` as `Int` while the service reports it
    /// as a float; both name the same number.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_f64() == other.as_f64()
            }
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_as(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| v.same_as(w)))
            }
            _ => self == other,
        }
    }

    /// Wrap a block's attributes as a single-item block list
    pub fn block(attributes: Attributes) -> Self {
        Value::List(vec![Value::Map(attributes)])
    }

    /// Build a list of strings
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }

    /// Convert JSON value to Value. `null` has no counterpart and yields None.
    pub fn from_json(value: &serde_json::Value) -> Option<Value> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Value::Int(i))
                } else {
                    n.as_f64().map(Value::Float)
                }
            }
            serde_json::Value::Array(arr) => Some(Value::List(
                arr.iter().filter_map(Value::from_json).collect(),
            )),
            serde_json::Value::Object(obj) => Some(Value::Map(
                obj.iter()
                    .filter_map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
                    .collect(),
            )),
        }
    }

    /// Convert Value to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

/// Convert a JSON object into an attribute map, dropping nulls
pub fn attributes_from_json(object: &serde_json::Map<String, serde_json::Value>) -> Attributes {
    object
        .iter()
        .filter_map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
        .collect()
}

/// Convert an attribute map into a JSON object
pub fn attributes_to_json(attributes: &Attributes) -> serde_json::Map<String, serde_json::Value> {
    attributes
        .iter()
        .map(|(k, v)| (k.clone(), v.to_json()))
        .collect()
}

/// Desired state declared in configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub attributes: Attributes,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(resource_type, name),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Current state fetched from the service
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub id: ResourceId,
    /// Composite identifier (e.g., "{product_id}/{catalog_product_id}")
    pub identifier: Option<String>,
    pub attributes: Attributes,
    /// Whether this state exists
    pub exists: bool,
}

impl State {
    pub fn not_found(id: ResourceId) -> Self {
        Self {
            id,
            identifier: None,
            attributes: HashMap::new(),
            exists: false,
        }
    }

    pub fn existing(id: ResourceId, attributes: Attributes) -> Self {
        Self {
            id,
            identifier: None,
            attributes,
            exists: true,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_compare_by_value() {
        assert!(Value::Int(43230000).same_as(&Value::Float(43230000.0)));
        assert!(Value::Float(1.0).same_as(&Value::Int(1)));
        assert!(!Value::Int(1).same_as(&Value::Float(1.5)));
        assert!(!Value::Int(1).same_as(&Value::String("1".to_string())));

        let mut pricing = HashMap::new();
        pricing.insert("amount".to_string(), Value::Int(10));
        let mut reported = HashMap::new();
        reported.insert("amount".to_string(), Value::Float(10.0));
        assert!(Value::block(pricing).same_as(&Value::block(reported)));
    }

    #[test]
    fn zero_values() {
        assert!(Value::String(String::new()).is_zero());
        assert!(Value::Bool(false).is_zero());
        assert!(Value::Float(0.0).is_zero());
        assert!(Value::List(vec![]).is_zero());
        assert!(!Value::Bool(true).is_zero());
        assert!(!Value::block(HashMap::new()).is_zero());
    }

    #[test]
    fn json_numbers_keep_fractions() {
        let value = Value::from_json(&json!({"index": 1.5, "count": 3})).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("index"), Some(&Value::Float(1.5)));
        assert_eq!(map.get("count"), Some(&Value::Int(3)));
    }

    #[test]
    fn json_nulls_are_dropped() {
        let object = json!({"name": "broker", "guid": null});
        let attrs = attributes_from_json(object.as_object().unwrap());
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("name"), Some(&Value::String("broker".to_string())));
    }

    #[test]
    fn block_round_trips_through_json() {
        let mut inner = HashMap::new();
        inner.insert("email".to_string(), Value::String("a@b.c".to_string()));
        let value = Value::block(inner);
        assert_eq!(Value::from_json(&value.to_json()), Some(value));
    }
}
