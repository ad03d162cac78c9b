//! Schema - Define type schemas for resources
//!
//! Providers define schemas for each resource type, enabling type and value
//! validation before any request is built.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

use crate::resource::{Attributes, Value};

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    /// String
    String,
    /// Integer
    Int,
    /// Floating point number
    Float,
    /// Boolean
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// List
    List(Box<AttributeType>),
    /// Map
    Map(Box<AttributeType>),
    /// Nested block, stored as a list of attribute maps
    Block(NestedBlock),
}

impl AttributeType {
    /// Check if a value conforms to this type
    ///
    /// Nested blocks are not handled here; they need paths for their errors
    /// and are checked by [`validate_attributes`].
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        match (self, value) {
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Int(_)) => Ok(()),
            // Integers written for float fields are accepted as-is
            (AttributeType::Float, Value::Float(_) | Value::Int(_)) => Ok(()),
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::Enum(variants), Value::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumVariant {
                        value: s.clone(),
                        expected: variants.clone(),
                    })
                }
            }

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Block(_), Value::List(items))
                if items.iter().all(|item| matches!(item, Value::Map(_))) =>
            {
                Ok(())
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Float => "Float".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Block(block) => match block.max_items {
                Some(1) => "Block".to_string(),
                _ => "List<Block>".to_string(),
            },
        }
    }

    /// Returns the nested block definition if this is a block type
    pub fn as_block(&self) -> Option<&NestedBlock> {
        match self {
            AttributeType::Block(block) => Some(block),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Value '{value}' does not match pattern {pattern}")]
    PatternMismatch { value: String, pattern: String },

    #[error("Length of '{value}' must be between {min} and {max}")]
    LengthOutOfRange {
        value: String,
        min: usize,
        max: usize,
    },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Attribute '{name}' is computed and cannot be set")]
    ComputedAttribute { name: String },

    #[error("Attribute '{name}' allows at most {max} item(s), got {got}")]
    TooManyItems { name: String, max: usize, got: usize },

    #[error("Attribute '{name}' needs at least {min} item(s), got {got}")]
    TooFewItems { name: String, min: usize, got: usize },

    #[error("{path}: {inner}")]
    AttributeError { path: String, inner: Box<TypeError> },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },
}

impl Value {
    /// Variant name used in error messages
    pub fn type_name(&self) -> String {
        match self {
            Value::String(_) => "String".to_string(),
            Value::Int(_) => "Int".to_string(),
            Value::Float(_) => "Float".to_string(),
            Value::Bool(_) => "Bool".to_string(),
            Value::List(_) => "List".to_string(),
            Value::Map(_) => "Map".to_string(),
        }
    }
}

/// Value check run after the type check passes
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// Value must match the pattern
    Regexp(&'static str),
    /// Value must match the pattern and its length must be within bounds
    RegexpLen {
        pattern: &'static str,
        min: usize,
        max: usize,
    },
}

impl Validator {
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        match self {
            Validator::Regexp(pattern) => check_pattern(s, pattern),
            Validator::RegexpLen { pattern, min, max } => {
                let len = s.chars().count();
                if len < *min || len > *max {
                    return Err(TypeError::LengthOutOfRange {
                        value: s.to_string(),
                        min: *min,
                        max: *max,
                    });
                }
                check_pattern(s, pattern)
            }
        }
    }
}

fn check_pattern(s: &str, pattern: &str) -> Result<(), TypeError> {
    let re = Regex::new(pattern).map_err(|e| TypeError::ValidationFailed {
        message: format!("invalid pattern {}: {}", pattern, e),
    })?;
    if re.is_match(s) {
        Ok(())
    } else {
        Err(TypeError::PatternMismatch {
            value: s.to_string(),
            pattern: pattern.to_string(),
        })
    }
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    /// Set by the service only
    pub computed: bool,
    /// Changing the value requires the resource to be re-created
    pub force_new: bool,
    /// Never printed in plain text
    pub sensitive: bool,
    pub description: Option<String>,
    pub validators: Vec<Validator>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            computed: false,
            force_new: false,
            sensitive: false,
            description: None,
            validators: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    fn validate_value(&self, path: &str, value: &Value, errors: &mut Vec<TypeError>) {
        if let Err(e) = self.attr_type.validate(value) {
            errors.push(TypeError::AttributeError {
                path: path.to_string(),
                inner: Box::new(e),
            });
            return;
        }

        if let AttributeType::Block(block) = &self.attr_type {
            block.validate_items(path, value, errors);
            return;
        }

        for validator in &self.validators {
            if let Err(e) = validator.validate(value) {
                errors.push(TypeError::AttributeError {
                    path: path.to_string(),
                    inner: Box::new(e),
                });
            }
        }
    }
}

/// Nested block schema
#[derive(Debug, Clone, Default)]
pub struct NestedBlock {
    pub attributes: HashMap<String, AttributeSchema>,
    pub min_items: usize,
    pub max_items: Option<usize>,
}

impl NestedBlock {
    /// Block holding any number of items
    pub fn list() -> Self {
        Self::default()
    }

    /// Block holding at most one item
    pub fn single() -> Self {
        Self {
            max_items: Some(1),
            ..Self::default()
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = min;
        self
    }

    pub fn is_single(&self) -> bool {
        self.max_items == Some(1)
    }

    fn validate_items(&self, path: &str, value: &Value, errors: &mut Vec<TypeError>) {
        let items = value.as_list().unwrap_or_default();
        if let Some(max) = self.max_items
            && items.len() > max
        {
            errors.push(TypeError::TooManyItems {
                name: path.to_string(),
                max,
                got: items.len(),
            });
        }
        if items.len() < self.min_items {
            errors.push(TypeError::TooFewItems {
                name: path.to_string(),
                min: self.min_items,
                got: items.len(),
            });
        }
        for (i, item) in items.iter().enumerate() {
            if let Some(attrs) = item.as_map() {
                validate_attributes(&self.attributes, attrs, &format!("{}.{}", path, i), errors);
            }
        }
    }
}

/// Validate attributes against a set of attribute schemas
///
/// `prefix` is the dotted path of the enclosing block, empty at top level.
pub fn validate_attributes(
    schemas: &HashMap<String, AttributeSchema>,
    attributes: &Attributes,
    prefix: &str,
    errors: &mut Vec<TypeError>,
) {
    let qualify = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        }
    };

    let mut names: Vec<&String> = schemas.keys().collect();
    names.sort();
    for name in names {
        let schema = &schemas[name];
        if schema.required && attributes.get(name).is_none_or(Value::is_zero) {
            let missing = match (&schema.attr_type, attributes.get(name)) {
                // false and empty lists are legitimate values for required fields
                (AttributeType::Bool | AttributeType::List(_), Some(_)) => false,
                _ => true,
            };
            if missing {
                errors.push(TypeError::MissingRequired {
                    name: qualify(name),
                });
            }
        }
    }

    let mut keys: Vec<&String> = attributes.keys().collect();
    keys.sort();
    for key in keys {
        let value = &attributes[key];
        match schemas.get(key) {
            Some(schema) if schema.computed => errors.push(TypeError::ComputedAttribute {
                name: qualify(key),
            }),
            Some(schema) => schema.validate_value(&qualify(key), value, errors),
            None => errors.push(TypeError::UnknownAttribute { name: qualify(key) }),
        }
    }
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub resource_type: String,
    pub attributes: HashMap<String, AttributeSchema>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            attributes: HashMap::new(),
            description: None,
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Names of attributes whose change forces re-creation, sorted
    pub fn force_new_attributes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .attributes
            .values()
            .filter(|a| a.force_new)
            .map(|a| a.name.as_str())
            .collect();
        names.sort();
        names
    }

    /// Attribute names in sorted order
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    /// Validate resource attributes
    pub fn validate(&self, attributes: &Attributes) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();
        validate_attributes(&self.attributes, attributes, "", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    /// List of strings
    pub fn string_list() -> AttributeType {
        AttributeType::List(Box::new(AttributeType::String))
    }

    /// Map of strings (e.g., locale-keyed translations)
    pub fn string_map() -> AttributeType {
        AttributeType::Map(Box::new(AttributeType::String))
    }

    /// Enum from a static list of allowed values
    pub fn one_of(values: &[&str]) -> AttributeType {
        AttributeType::Enum(values.iter().map(|v| v.to_string()).collect())
    }
}
