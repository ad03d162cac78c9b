//! Masking of sensitive values before they reach the terminal

use std::collections::HashMap;

use serde_json::{Map, Value as JsonValue};

use sell_core::schema::{AttributeSchema, AttributeType};

/// Shown in place of a sensitive value
pub const SENSITIVE: &str = "(sensitive)";

/// Replace every set sensitive value in `object`, descending into blocks
///
/// Works on attribute JSON and on merge patches alike: a block may be a
/// list of objects or a single object, and `null` stays `null`.
pub fn redact(object: &mut Map<String, JsonValue>, schemas: &HashMap<String, AttributeSchema>) {
    for (key, value) in object.iter_mut() {
        let Some(schema) = schemas.get(key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if schema.sensitive {
            *value = JsonValue::String(SENSITIVE.to_string());
            continue;
        }
        if let AttributeType::Block(block) = &schema.attr_type {
            match value {
                JsonValue::Object(item) => redact(item, &block.attributes),
                JsonValue::Array(items) => {
                    for item in items.iter_mut().filter_map(JsonValue::as_object_mut) {
                        redact(item, &block.attributes);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sell_core::schema::NestedBlock;
    use serde_json::json;

    fn schemas() -> HashMap<String, AttributeSchema> {
        let credentials = NestedBlock::single()
            .attribute(AttributeSchema::new("user", AttributeType::String))
            .attribute(AttributeSchema::new("token", AttributeType::String).sensitive());
        [
            AttributeSchema::new("name", AttributeType::String),
            AttributeSchema::new("auth_password", AttributeType::String).sensitive(),
            AttributeSchema::new("credentials", AttributeType::Block(credentials)),
        ]
        .into_iter()
        .map(|s| (s.name.clone(), s))
        .collect()
    }

    fn redacted(value: JsonValue) -> JsonValue {
        let JsonValue::Object(mut object) = value else {
            panic!("expected an object");
        };
        redact(&mut object, &schemas());
        JsonValue::Object(object)
    }

    #[test]
    fn masks_top_level_and_nested_values() {
        let value = redacted(json!({
            "name": "broker",
            "auth_password": "s3cret",
            "credentials": [{ "user": "apikey", "token": "t0ken" }]
        }));
        assert_eq!(
            value,
            json!({
                "name": "broker",
                "auth_password": SENSITIVE,
                "credentials": [{ "user": "apikey", "token": SENSITIVE }]
            })
        );
    }

    #[test]
    fn patch_shapes_are_masked_and_nulls_kept() {
        let value = redacted(json!({
            "auth_password": null,
            "credentials": { "token": "t0ken" },
            "unknown": "left alone"
        }));
        assert_eq!(
            value,
            json!({
                "auth_password": null,
                "credentials": { "token": SENSITIVE },
                "unknown": "left alone"
            })
        );
    }
}
