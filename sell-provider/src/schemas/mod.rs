//! Onboarding resource schema definitions
//!
//! Each resource module returns a [`SellSchemaConfig`]: the attribute schema
//! plus the patchable top-level fields and the parts of its composite ID.
//! Blocks shared by the catalog resources live here.

pub mod catalog_deployment;
pub mod catalog_plan;
pub mod catalog_product;
pub mod iam_registration;
pub mod product;
pub mod registration;
pub mod resource_broker;

use sell_core::schema::{AttributeSchema, AttributeType, NestedBlock, ResourceSchema, Validator, types};

use crate::models::LOCALES;

/// Schema configuration of one onboarding resource
pub struct SellSchemaConfig {
    /// Resource type name (e.g., "ibm_onboarding_catalog_plan")
    pub resource_type_name: &'static str,
    /// Top-level attributes an update may send
    pub patch_fields: &'static [&'static str],
    /// Attributes joined with `/` to form the resource ID
    pub id_parts: &'static [&'static str],
    /// The resource schema with attribute definitions
    pub schema: ResourceSchema,
}

/// Returns the configs of every onboarding resource
pub fn configs() -> Vec<SellSchemaConfig> {
    vec![
        product::onboarding_product_config(),
        catalog_product::onboarding_catalog_product_config(),
        catalog_plan::onboarding_catalog_plan_config(),
        catalog_deployment::onboarding_catalog_deployment_config(),
        registration::onboarding_registration_config(),
        resource_broker::onboarding_resource_broker_config(),
        iam_registration::onboarding_iam_registration_config(),
    ]
}

/// Look up the config of a resource type by name
pub fn get_schema_config(resource_type: &str) -> Option<SellSchemaConfig> {
    configs()
        .into_iter()
        .find(|c| c.resource_type_name == resource_type)
}

/// Returns all onboarding schemas
pub fn all_schemas() -> Vec<ResourceSchema> {
    configs().into_iter().map(|c| c.schema).collect()
}

// =============================================================================
// Validators
// =============================================================================

pub const PRODUCT_ID: Validator = Validator::RegexpLen {
    pattern: r"^[a-zA-Z0-9]{32}:o:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
    min: 71,
    max: 71,
};

/// Catalog product, plan and deployment IDs
pub const CATALOG_OBJECT_ID: Validator = Validator::RegexpLen {
    pattern: r"^[a-zA-Z\-_\d]+$",
    min: 2,
    max: 128,
};

pub const ENV: Validator = Validator::RegexpLen {
    pattern: r"^[a-z]+$",
    min: 1,
    max: 64,
};

pub const CATALOG_NAME: Validator = Validator::Regexp(r"^[a-zA-Z0-9\-.]+$");

// =============================================================================
// Shared attributes and blocks
// =============================================================================

fn block(nested: NestedBlock) -> AttributeType {
    AttributeType::Block(nested)
}

fn string(name: &str, description: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::String).with_description(description)
}

fn boolean(name: &str, description: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::Bool).with_description(description)
}

/// Optional `env` attribute selecting the target environment
pub(crate) fn env_attribute() -> AttributeSchema {
    string("env", "The environment to fetch this object from.").with_validator(ENV)
}

pub(crate) fn product_id_attribute() -> AttributeSchema {
    string("product_id", "The unique ID of the product.")
        .required()
        .force_new()
        .with_validator(PRODUCT_ID)
}

pub(crate) fn computed_string(name: &str, description: &str) -> AttributeSchema {
    string(name, description).computed()
}

/// `primary_contact { name, email }`, both required
pub(crate) fn primary_contact_attribute(description: &str) -> AttributeSchema {
    AttributeSchema::new(
        "primary_contact",
        block(
            NestedBlock::single()
                .min_items(1)
                .attribute(string("name", "The name of the primary contact.").required())
                .attribute(string("email", "The email address of the primary contact.").required()),
        ),
    )
    .required()
    .with_description(description)
}

/// Attributes every global catalog object (product, plan, deployment) has
pub(crate) fn catalog_object_attributes(kind: AttributeType, name: &str) -> Vec<AttributeSchema> {
    vec![
        env_attribute(),
        string("object_id", "The desired ID of the global catalog object."),
        string("name", name).required().with_validator(CATALOG_NAME),
        boolean("active", "Whether the service is active.").required(),
        boolean(
            "disabled",
            "Determines the global visibility for the catalog entry, and its children.",
        )
        .required(),
        AttributeSchema::new("kind", kind)
            .required()
            .with_description("The kind of the global catalog object."),
        overview_ui_attribute(),
        AttributeSchema::new("tags", types::string_list())
            .required()
            .with_description("A list of tags that carry information about your product."),
        object_provider_attribute(),
        AttributeSchema::new("geo_tags", types::string_list())
            .computed()
            .with_description("A list of tags that carry information about the geographic location."),
        computed_string("url", "The global catalog URL of your product."),
    ]
}

fn overview_ui_attribute() -> AttributeSchema {
    let content = NestedBlock::single()
        .attribute(string("display_name", "The display name of the product."))
        .attribute(string("description", "The short description of the product."))
        .attribute(string(
            "long_description",
            "The detailed description of your product. Markdown markup language is supported.",
        ));
    AttributeSchema::new(
        "overview_ui",
        block(NestedBlock::single().attribute(
            AttributeSchema::new("en", block(content))
                .with_description("Translated details about the service."),
        )),
    )
    .with_description("The object that contains the service details from the Overview page.")
}

fn object_provider_attribute() -> AttributeSchema {
    AttributeSchema::new(
        "object_provider",
        block(
            NestedBlock::single()
                .min_items(1)
                .attribute(string("name", "The name of the provider."))
                .attribute(string("email", "The email address of the provider.")),
        ),
    )
    .required()
    .with_description("The provider or owner of the product.")
}

/// `metadata.ui`: strings, urls, visibility and ordering
pub(crate) fn metadata_ui_attribute() -> AttributeSchema {
    let bullets = NestedBlock::list()
        .attribute(string("description", "The description about the features of the product."))
        .attribute(AttributeSchema::new("description_i18n", types::string_map()))
        .attribute(string("title", "The descriptive title for the feature."))
        .attribute(AttributeSchema::new("title_i18n", types::string_map()));
    let media = NestedBlock::list()
        .attribute(string("caption", "A descriptive caption for the media.").required())
        .attribute(AttributeSchema::new("caption_i18n", types::string_map()))
        .attribute(string("thumbnail", "The reduced-size version of your images and videos."))
        .attribute(string("type", "The type of the media.").required())
        .attribute(string("url", "The URL that links to the media.").required());
    let content = NestedBlock::single()
        .attribute(
            AttributeSchema::new("bullets", block(bullets))
                .with_description("Features that highlight your product's benefits."),
        )
        .attribute(
            AttributeSchema::new("media", block(media))
                .with_description("The list of supporting media for this product."),
        )
        .attribute(string(
            "embeddable_dashboard",
            "Controls if your service has a custom dashboard or Resource Detail page.",
        ));
    let strings = NestedBlock::single().attribute(AttributeSchema::new("en", block(content)));
    let urls = NestedBlock::single()
        .attribute(string("doc_url", "The URL for your product's documentation."))
        .attribute(string("apidocs_url", "The URL for your product's API documentation."))
        .attribute(string("terms_url", "The URL for your product's end user license agreement."))
        .attribute(string("instructions_url", "Content source of the Getting Started tab."))
        .attribute(string("catalog_details_url", "The provisioning URL of your service."))
        .attribute(string("custom_create_page_url", "The provisioning page URL of your service."))
        .attribute(string("dashboard", "Controls if your service has a custom dashboard."));

    AttributeSchema::new(
        "ui",
        block(
            NestedBlock::single()
                .attribute(
                    AttributeSchema::new("strings", block(strings))
                        .with_description("The data strings."),
                )
                .attribute(
                    AttributeSchema::new("urls", block(urls))
                        .with_description("Metadata with URLs related to a service."),
                )
                .attribute(boolean(
                    "hidden",
                    "Whether the object is hidden from the consumption catalog.",
                ))
                .attribute(
                    AttributeSchema::new("side_by_side_index", AttributeType::Float)
                        .with_description("Ordering of objects listed side-by-side."),
                ),
        ),
    )
    .with_description("The UI metadata of this service.")
}

/// The five service flags of `metadata.service`
pub(crate) fn service_flags() -> NestedBlock {
    NestedBlock::single()
        .attribute(boolean(
            "rc_provisionable",
            "Whether the service is provisionable by the resource controller service.",
        ))
        .attribute(boolean(
            "iam_compatible",
            "Whether the service is compatible with the IAM service.",
        ))
        .attribute(boolean("bindable", "Deprecated. Controls the Connections tab."))
        .attribute(boolean(
            "plan_updateable",
            "Indicates plan update support and controls the Plan tab.",
        ))
        .attribute(boolean(
            "service_key_supported",
            "Indicates service credentials support and controls the Service Credential tab.",
        ))
}

pub(crate) fn rc_compatible_attribute() -> AttributeSchema {
    boolean(
        "rc_compatible",
        "Whether the object is compatible with the resource controller service.",
    )
}

/// Block with one `item` block per locale
pub(crate) fn i18n_block(item: &NestedBlock) -> NestedBlock {
    LOCALES.iter().fold(NestedBlock::single(), |nested, locale| {
        nested.attribute(AttributeSchema::new(*locale, block(item.clone())))
    })
}

/// Block with a `default` string plus one string per locale
pub(crate) fn i18n_strings_block() -> NestedBlock {
    LOCALES.iter().fold(
        NestedBlock::single().attribute(AttributeSchema::new("default", AttributeType::String)),
        |nested, locale| nested.attribute(AttributeSchema::new(*locale, AttributeType::String)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sell_core::resource::Value;

    #[test]
    fn every_resource_has_a_config() {
        let names: Vec<&str> = configs().iter().map(|c| c.resource_type_name).collect();
        assert_eq!(
            names,
            vec![
                "ibm_onboarding_product",
                "ibm_onboarding_catalog_product",
                "ibm_onboarding_catalog_plan",
                "ibm_onboarding_catalog_deployment",
                "ibm_onboarding_registration",
                "ibm_onboarding_resource_broker",
                "ibm_onboarding_iam_registration",
            ]
        );
    }

    #[test]
    fn config_names_match_schema_types() {
        for config in configs() {
            assert_eq!(config.resource_type_name, config.schema.resource_type);
        }
    }

    #[test]
    fn patch_fields_and_id_parts_exist_in_schema() {
        for config in configs() {
            for field in config.patch_fields.iter().chain(config.id_parts) {
                assert!(
                    config.schema.attributes.contains_key(*field),
                    "{} has no attribute {}",
                    config.resource_type_name,
                    field
                );
            }
        }
    }

    #[test]
    fn unknown_type_has_no_config() {
        assert!(get_schema_config("ibm_onboarding_unknown").is_none());
    }

    #[test]
    fn product_id_validator_requires_exact_shape() {
        let valid = Value::String(format!(
            "{}:o:{}",
            "a".repeat(32),
            "0123abcd-0123-4567-89ab-0123456789ab"
        ));
        assert!(PRODUCT_ID.validate(&valid).is_ok());
        assert!(PRODUCT_ID.validate(&Value::String("short".to_string())).is_err());
    }

    #[test]
    fn env_validator_rejects_uppercase() {
        assert!(ENV.validate(&Value::String("current".to_string())).is_ok());
        assert!(ENV.validate(&Value::String("Current".to_string())).is_err());
        assert!(ENV.validate(&Value::String(String::new())).is_err());
    }

    #[test]
    fn i18n_block_covers_every_locale() {
        let nested = i18n_block(&NestedBlock::single());
        assert_eq!(nested.attributes.len(), LOCALES.len());
        assert!(i18n_strings_block().attributes.contains_key("default"));
    }
}
