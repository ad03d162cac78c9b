//! ibm_onboarding_catalog_deployment schema

use sell_core::schema::{AttributeSchema, AttributeType, NestedBlock, ResourceSchema, types};

use super::catalog_plan::catalog_plan_id_reference;
use super::catalog_product::catalog_product_id_reference;
use super::{
    SellSchemaConfig, catalog_object_attributes, i18n_block, metadata_ui_attribute,
    product_id_attribute, rc_compatible_attribute, service_flags,
};

pub const DEPLOYMENT_KINDS: &[&str] = &["deployment"];

fn string(name: &str, description: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::String).with_description(description)
}

fn boolean(name: &str, description: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::Bool).with_description(description)
}

/// `i18n` with `{ displayname, description }` per locale
fn i18n_attribute() -> AttributeSchema {
    let fields = NestedBlock::single()
        .attribute(string("displayname", "The display name for the object."))
        .attribute(string("description", "The description for the object."));
    AttributeSchema::new("i18n", AttributeType::Block(i18n_block(&fields)))
        .with_description("The description of your product in translation.")
}

fn parameters_attribute() -> AttributeSchema {
    let options = NestedBlock::list()
        .attribute(string("displayname", "The display name for the object."))
        .attribute(string("value", "The value for the object."))
        .attribute(i18n_attribute());
    let parameters = NestedBlock::list()
        .attribute(string("displayname", "The display name for the object."))
        .attribute(string("name", "The key of the parameter."))
        .attribute(string("type", "The type of custom parameter."))
        .attribute(
            AttributeSchema::new("options", AttributeType::Block(options))
                .with_description("A JSON structure to describe selectable options."),
        )
        .attribute(
            AttributeSchema::new("value", types::string_list())
                .with_description("The value of the parameter."),
        )
        .attribute(string("layout", "Specifies the layout of check box or radio input types."))
        .attribute(
            AttributeSchema::new("associations", types::string_map())
                .with_description("A JSON structure to describe the interactions with pricing plans and/or other custom parameters."),
        )
        .attribute(string("validation_url", "The validation URL for the parameter."))
        .attribute(string("options_url", "The options URL for the parameter."))
        .attribute(string("invalidmessage", "The message that appears when the content of the text box is invalid."))
        .attribute(string("description", "The description of the parameter."))
        .attribute(boolean("required", "Whether the parameter is required."))
        .attribute(string("pattern", "A regular expression that the value is checked against."))
        .attribute(string("placeholder", "The placeholder of the parameter."))
        .attribute(boolean("readonly", "Whether the parameter is read-only."))
        .attribute(boolean("hidden", "Whether the parameter is hidden."))
        .attribute(i18n_attribute());
    AttributeSchema::new("parameters", AttributeType::Block(parameters))
        .with_description("The global catalog metadata of the service.")
}

pub fn onboarding_catalog_deployment_config() -> SellSchemaConfig {
    let broker = NestedBlock::single()
        .attribute(string("name", "The name of the resource broker."))
        .attribute(string("guid", "Crn or guid of the resource broker."));
    let deployment = NestedBlock::single()
        .attribute(
            AttributeSchema::new("broker", AttributeType::Block(broker))
                .with_description("The global catalog metadata of the deployment."),
        )
        .attribute(string("location", "The global catalog deployment location."))
        .attribute(string("location_url", "The global catalog deployment URL of location."))
        .attribute(string("target_crn", "Region crn."));
    let metadata = NestedBlock::single()
        .attribute(rc_compatible_attribute())
        .attribute(metadata_ui_attribute())
        .attribute(
            AttributeSchema::new(
                "service",
                AttributeType::Block(service_flags().attribute(parameters_attribute())),
            )
            .with_description("The global catalog metadata of the service."),
        )
        .attribute(
            AttributeSchema::new("deployment", AttributeType::Block(deployment))
                .with_description("The global catalog metadata of the deployment."),
        );

    let schema = catalog_object_attributes(
        types::one_of(DEPLOYMENT_KINDS),
        "The programmatic name of this deployment.",
    )
    .into_iter()
    .fold(
        ResourceSchema::new("ibm_onboarding_catalog_deployment")
            .with_description("A deployment location of a global catalog plan.")
            .attribute(product_id_attribute())
            .attribute(catalog_product_id_reference())
            .attribute(catalog_plan_id_reference()),
        ResourceSchema::attribute,
    )
    .attribute(
        AttributeSchema::new("metadata", AttributeType::Block(metadata))
            .with_description("Global catalog deployment metadata."),
    )
    .attribute(
        AttributeSchema::new("catalog_deployment_id", AttributeType::String)
            .computed()
            .with_description("The ID of a global catalog object."),
    );

    SellSchemaConfig {
        resource_type_name: "ibm_onboarding_catalog_deployment",
        patch_fields: &[
            "active",
            "disabled",
            "overview_ui",
            "tags",
            "object_provider",
            "metadata",
        ],
        id_parts: &[
            "product_id",
            "catalog_product_id",
            "catalog_plan_id",
            "catalog_deployment_id",
        ],
        schema,
    }
}
