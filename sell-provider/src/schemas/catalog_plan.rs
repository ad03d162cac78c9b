//! ibm_onboarding_catalog_plan schema

use sell_core::schema::{AttributeSchema, AttributeType, NestedBlock, ResourceSchema, types};

use super::catalog_product::catalog_product_id_reference;
use super::{
    CATALOG_OBJECT_ID, SellSchemaConfig, catalog_object_attributes, metadata_ui_attribute,
    product_id_attribute, rc_compatible_attribute, service_flags,
};

pub const PLAN_KINDS: &[&str] = &["plan"];
pub const PRICING_TYPES: &[&str] = &["free", "paid", "subscription", "lite"];
pub const PRICING_ORIGINS: &[&str] = &["global_catalog", "pricing_catalog"];

pub fn onboarding_catalog_plan_config() -> SellSchemaConfig {
    let pricing = NestedBlock::single()
        .attribute(
            AttributeSchema::new("type", types::one_of(PRICING_TYPES))
                .with_description("The type of the pricing plan."),
        )
        .attribute(
            AttributeSchema::new("origin", types::one_of(PRICING_ORIGINS))
                .with_description("The source of the pricing information."),
        );
    let plan = NestedBlock::single()
        .attribute(
            AttributeSchema::new("allow_internal_users", AttributeType::Bool)
                .with_description("Whether IBM employees can use the plan."),
        )
        .attribute(
            AttributeSchema::new("bindable", AttributeType::Bool)
                .with_description("Deprecated. Controls the Connections tab."),
        );
    let metadata = NestedBlock::single()
        .attribute(rc_compatible_attribute())
        .attribute(metadata_ui_attribute())
        .attribute(
            AttributeSchema::new("service", AttributeType::Block(service_flags()))
                .with_description("The global catalog service metadata object."),
        )
        .attribute(
            AttributeSchema::new("pricing", AttributeType::Block(pricing))
                .with_description("The pricing metadata of this object."),
        )
        .attribute(
            AttributeSchema::new("plan", AttributeType::Block(plan))
                .with_description("Metadata controlling plan related settings."),
        );

    let schema = catalog_object_attributes(
        types::one_of(PLAN_KINDS),
        "The programmatic name of this plan.",
    )
    .into_iter()
    .fold(
        ResourceSchema::new("ibm_onboarding_catalog_plan")
            .with_description("A pricing plan of a global catalog product.")
            .attribute(product_id_attribute())
            .attribute(catalog_product_id_reference()),
        ResourceSchema::attribute,
    )
    .attribute(
        AttributeSchema::new("metadata", AttributeType::Block(metadata))
            .with_description("Global catalog plan metadata."),
    )
    .attribute(
        AttributeSchema::new("catalog_plan_id", AttributeType::String)
            .computed()
            .with_description("The ID of a global catalog object."),
    );

    SellSchemaConfig {
        resource_type_name: "ibm_onboarding_catalog_plan",
        patch_fields: &[
            "active",
            "disabled",
            "overview_ui",
            "tags",
            "object_provider",
            "metadata",
        ],
        id_parts: &["product_id", "catalog_product_id", "catalog_plan_id"],
        schema,
    }
}

/// `catalog_plan_id` as a required, ForceNew parent reference
pub(crate) fn catalog_plan_id_reference() -> AttributeSchema {
    AttributeSchema::new("catalog_plan_id", AttributeType::String)
        .required()
        .force_new()
        .with_validator(CATALOG_OBJECT_ID)
        .with_description("The unique ID of this global catalog plan.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_ids_force_new() {
        let config = onboarding_catalog_plan_config();
        assert_eq!(
            config.schema.force_new_attributes(),
            vec!["catalog_product_id", "product_id"]
        );
    }

    #[test]
    fn plan_id_is_computed() {
        let config = onboarding_catalog_plan_config();
        assert!(config.schema.attributes["catalog_plan_id"].computed);
    }
}
