//! Patch-as-map - Turn a serialized patch object into a merge-patch payload
//!
//! Serializing a patch struct omits every unset field, so the service cannot
//! tell "unchanged" from "cleared". The walk below visits the schema shape
//! of each patchable field and, per path:
//!
//! - sends an explicit `null` when the value changed and is no longer set,
//! - recurses into a set block (`path.0` for single blocks, `path.i` for lists),
//! - drops the key when the value is not set.
//!
//! Required attributes are left exactly as serialized.

use std::collections::HashMap;

use serde_json::{Map, Value as JsonValue};

use crate::resource::Value;
use crate::resource_data::ResourceData;
use crate::schema::{AttributeSchema, NestedBlock};

/// Build the merge-patch map for the given top-level `fields`
///
/// `patch` is the serialized patch struct; anything other than a JSON
/// object yields an empty patch.
pub fn patch_as_map(
    patch: JsonValue,
    attributes: &HashMap<String, AttributeSchema>,
    fields: &[&str],
    d: &ResourceData,
) -> Map<String, JsonValue> {
    let mut patch = match patch {
        JsonValue::Object(map) => map,
        _ => Map::new(),
    };

    for field in fields {
        match attributes.get(*field) {
            Some(schema) if schema.required => {}
            Some(schema) => apply(&mut patch, field, field, schema, d),
            None => {
                log::warn!("patch field '{}' has no schema, left as serialized", field);
            }
        }
    }

    patch
}

/// Walk the attributes of one block item rooted at `root_path`
fn walk_block(
    patch: &mut Map<String, JsonValue>,
    block: &NestedBlock,
    d: &ResourceData,
    root_path: &str,
) {
    for (name, schema) in &block.attributes {
        if schema.required || schema.computed {
            continue;
        }
        let path = format!("{}.{}", root_path, name);
        apply(patch, name, &path, schema, d);
    }
}

fn apply(
    patch: &mut Map<String, JsonValue>,
    key: &str,
    path: &str,
    schema: &AttributeSchema,
    d: &ResourceData,
) {
    let exists = is_set(d, path);

    if d.has_change(path) && !exists {
        patch.insert(key.to_string(), JsonValue::Null);
    } else if exists {
        let Some(block) = schema.attr_type.as_block() else {
            return;
        };
        match patch.get_mut(key) {
            Some(JsonValue::Object(inner)) if block.is_single() => {
                walk_block(inner, block, d, &format!("{}.0", path));
            }
            Some(JsonValue::Array(items)) => {
                for (i, item) in items.iter_mut().enumerate() {
                    if let JsonValue::Object(inner) = item {
                        walk_block(inner, block, d, &format!("{}.{}", path, i));
                    }
                }
            }
            _ => {}
        }
    } else {
        patch.remove(key);
    }
}

/// Whether the planned value at `path` counts as set
///
/// Booleans and numbers are set whenever present, so turning a flag off
/// sends `false` rather than `null`. Strings and collections must be
/// non-empty.
fn is_set(d: &ResourceData, path: &str) -> bool {
    match d.get(path) {
        Some(Value::Bool(_) | Value::Int(_) | Value::Float(_)) => true,
        Some(other) => !other.is_zero(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Attributes;
    use crate::schema::{AttributeType, ResourceSchema, types};
    use serde_json::json;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    fn schema() -> ResourceSchema {
        let urls = NestedBlock::single()
            .attribute(AttributeSchema::new("doc_url", AttributeType::String))
            .attribute(AttributeSchema::new("terms_url", AttributeType::String));
        let media = NestedBlock::list()
            .attribute(AttributeSchema::new("caption", AttributeType::String).required())
            .attribute(AttributeSchema::new("thumbnail", AttributeType::String));
        let ui = NestedBlock::single()
            .attribute(AttributeSchema::new("urls", AttributeType::Block(urls)))
            .attribute(AttributeSchema::new("media", AttributeType::Block(media)))
            .attribute(AttributeSchema::new("hidden", AttributeType::Bool));
        ResourceSchema::new("catalog")
            .attribute(AttributeSchema::new("active", AttributeType::Bool).required())
            .attribute(AttributeSchema::new("tags", types::string_list()).required())
            .attribute(AttributeSchema::new("object_id", AttributeType::String))
            .attribute(AttributeSchema::new("ui", AttributeType::Block(ui)))
    }

    fn ui(urls: Option<Attributes>, hidden: Option<bool>, media: Vec<Attributes>) -> Value {
        let mut ui = HashMap::new();
        if let Some(urls) = urls {
            ui.insert("urls".to_string(), Value::block(urls));
        }
        if let Some(hidden) = hidden {
            ui.insert("hidden".to_string(), Value::Bool(hidden));
        }
        if !media.is_empty() {
            ui.insert(
                "media".to_string(),
                Value::List(media.into_iter().map(Value::Map).collect()),
            );
        }
        Value::block(ui)
    }

    fn urls(doc: &str, terms: &str) -> Attributes {
        let mut urls = HashMap::new();
        urls.insert("doc_url".to_string(), s(doc));
        urls.insert("terms_url".to_string(), s(terms));
        urls
    }

    #[test]
    fn cleared_nested_leaf_becomes_null() {
        let schema = schema();
        let mut prior = HashMap::new();
        prior.insert(
            "ui".to_string(),
            ui(Some(urls("https://docs", "https://terms")), None, vec![]),
        );
        let mut planned = HashMap::new();
        planned.insert("ui".to_string(), ui(Some(urls("https://docs", "")), None, vec![]));
        let d = ResourceData::with_prior("id", prior, planned);

        let serialized = json!({"ui": {"urls": {"doc_url": "https://docs"}}});
        let patch = patch_as_map(serialized, &schema.attributes, &["ui"], &d);

        assert_eq!(
            JsonValue::Object(patch),
            json!({"ui": {"urls": {"doc_url": "https://docs", "terms_url": null}}})
        );
    }

    #[test]
    fn removed_block_becomes_null() {
        let schema = schema();
        let mut prior = HashMap::new();
        prior.insert("ui".to_string(), ui(None, Some(true), vec![]));
        let d = ResourceData::with_prior("id", prior, HashMap::new());

        let patch = patch_as_map(json!({}), &schema.attributes, &["ui", "object_id"], &d);

        assert_eq!(JsonValue::Object(patch), json!({"ui": null}));
    }

    #[test]
    fn unchanged_fields_are_omitted() {
        let schema = schema();
        let mut attrs = HashMap::new();
        attrs.insert("object_id".to_string(), s("obj"));
        attrs.insert("ui".to_string(), ui(None, Some(true), vec![]));
        let d = ResourceData::existing("id", attrs);

        let patch = patch_as_map(json!({}), &schema.attributes, &["object_id", "ui"], &d);

        assert!(patch.is_empty());
    }

    #[test]
    fn flag_turned_off_is_sent_as_false() {
        let schema = schema();
        let mut prior = HashMap::new();
        prior.insert("ui".to_string(), ui(None, Some(true), vec![]));
        let mut planned = HashMap::new();
        planned.insert("ui".to_string(), ui(None, Some(false), vec![]));
        let d = ResourceData::with_prior("id", prior, planned);

        let serialized = json!({"ui": {"hidden": false}});
        let patch = patch_as_map(serialized, &schema.attributes, &["ui"], &d);

        assert_eq!(JsonValue::Object(patch), json!({"ui": {"hidden": false}}));
    }

    #[test]
    fn list_items_are_walked_by_index() {
        let schema = schema();
        let item = |caption: &str, thumbnail: &str| {
            let mut m = HashMap::new();
            m.insert("caption".to_string(), s(caption));
            m.insert("thumbnail".to_string(), s(thumbnail));
            m
        };
        let mut prior = HashMap::new();
        prior.insert(
            "ui".to_string(),
            ui(None, None, vec![item("one", "a.png"), item("two", "b.png")]),
        );
        let mut planned = HashMap::new();
        planned.insert(
            "ui".to_string(),
            ui(None, None, vec![item("one", "a.png"), item("two", "")]),
        );
        let d = ResourceData::with_prior("id", prior, planned);

        let serialized = json!({"ui": {"media": [
            {"caption": "one", "thumbnail": "a.png"},
            {"caption": "two"}
        ]}});
        let patch = patch_as_map(serialized, &schema.attributes, &["ui"], &d);

        assert_eq!(
            JsonValue::Object(patch),
            json!({"ui": {"media": [
                {"caption": "one", "thumbnail": "a.png"},
                {"caption": "two", "thumbnail": null}
            ]}})
        );
    }

    #[test]
    fn required_fields_are_left_as_serialized() {
        let schema = schema();
        let mut prior = HashMap::new();
        prior.insert("active".to_string(), Value::Bool(true));
        let mut planned = HashMap::new();
        planned.insert("active".to_string(), Value::Bool(false));
        let d = ResourceData::with_prior("id", prior, planned);

        let patch = patch_as_map(
            json!({"active": false}),
            &schema.attributes,
            &["active", "tags"],
            &d,
        );

        assert_eq!(JsonValue::Object(patch), json!({"active": false}));
    }
}
