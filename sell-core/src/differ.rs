//! Differ - Compare desired state with current state
//!
//! Compares the desired attributes of a resource with its current state and
//! reports what an apply would do.

use std::collections::BTreeSet;

use crate::resource::{Attributes, Resource, ResourceId, State, Value};
use crate::schema::ResourceSchema;

/// Result of a diff operation
#[derive(Debug, Clone, PartialEq)]
pub enum Diff {
    /// Resource does not exist -> needs creation
    Create(Resource),
    /// Resource exists with differences -> needs update
    Update {
        id: ResourceId,
        from: State,
        to: Resource,
        changed_attributes: Vec<String>,
    },
    /// Resource exists with no differences -> no action needed
    NoChange(ResourceId),
}

impl Diff {
    /// Returns whether this Diff involves a change
    pub fn is_change(&self) -> bool {
        !matches!(self, Diff::NoChange(_))
    }
}

/// Compare desired state with current state to compute a Diff
///
/// Computed attributes are owned by the service and never count as changes.
pub fn diff(desired: &Resource, current: &State, schema: &ResourceSchema) -> Diff {
    if !current.exists {
        return Diff::Create(desired.clone());
    }

    let changed: Vec<String> = find_changed_attributes(&desired.attributes, &current.attributes)
        .into_iter()
        .filter(|name| !schema.attributes.get(name).is_some_and(|a| a.computed))
        .collect();

    if changed.is_empty() {
        Diff::NoChange(desired.id.clone())
    } else {
        Diff::Update {
            id: desired.id.clone(),
            from: current.clone(),
            to: desired.clone(),
            changed_attributes: changed,
        }
    }
}

/// Find changed top-level attributes between desired and current state
///
/// Absent and zero values compare equal, as do numerically equal integers
/// and floats. The result is sorted.
pub fn find_changed_attributes(desired: &Attributes, current: &Attributes) -> Vec<String> {
    let keys: BTreeSet<&String> = desired.keys().chain(current.keys()).collect();
    let set = |attrs: &Attributes, key: &str| -> Option<Value> {
        attrs.get(key).filter(|v| !v.is_zero()).cloned()
    };

    keys.into_iter()
        // Skip internal attributes (starting with _)
        .filter(|key| !key.starts_with('_'))
        .filter(|key| {
            match (set(desired, key.as_str()), set(current, key.as_str())) {
                (None, None) => false,
                (Some(desired), Some(current)) => !desired.same_as(&current),
                _ => true,
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType};
    use std::collections::HashMap;

    fn schema() -> ResourceSchema {
        ResourceSchema::new("plan")
            .attribute(AttributeSchema::new("name", AttributeType::String))
            .attribute(AttributeSchema::new("active", AttributeType::Bool))
            .attribute(AttributeSchema::new("url", AttributeType::String).computed())
    }

    #[test]
    fn diff_create_when_not_exists() {
        let desired = Resource::new("plan", "test");
        let current = State::not_found(ResourceId::new("plan", "test"));

        let result = diff(&desired, &current, &schema());
        assert!(matches!(result, Diff::Create(_)));
    }

    #[test]
    fn diff_ignores_computed_attributes() {
        let desired = Resource::new("plan", "test")
            .with_attribute("name", Value::String("free-plan".to_string()));

        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::String("free-plan".to_string()));
        attrs.insert(
            "url".to_string(),
            Value::String("https://globalcatalog.example/plan".to_string()),
        );
        let current = State::existing(ResourceId::new("plan", "test"), attrs);

        let result = diff(&desired, &current, &schema());
        assert!(matches!(result, Diff::NoChange(_)));
    }

    #[test]
    fn diff_update_reports_cleared_attributes() {
        let desired = Resource::new("plan", "test")
            .with_attribute("name", Value::String("paid-plan".to_string()));

        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::String("free-plan".to_string()));
        attrs.insert("active".to_string(), Value::Bool(true));
        let current = State::existing(ResourceId::new("plan", "test"), attrs);

        match diff(&desired, &current, &schema()) {
            Diff::Update {
                changed_attributes, ..
            } => {
                assert_eq!(changed_attributes, vec!["active", "name"]);
            }
            other => panic!("Expected Update, got {:?}", other),
        }
    }

    #[test]
    fn zero_values_match_absent_ones() {
        let mut desired = HashMap::new();
        desired.insert("active".to_string(), Value::Bool(false));
        assert!(find_changed_attributes(&desired, &HashMap::new()).is_empty());
    }

    #[test]
    fn integral_numbers_match_reported_floats() {
        let mut desired = HashMap::new();
        desired.insert("unspsc".to_string(), Value::Int(43230000));
        let mut current = HashMap::new();
        current.insert("unspsc".to_string(), Value::Float(43230000.0));
        assert!(find_changed_attributes(&desired, &current).is_empty());
    }
}
