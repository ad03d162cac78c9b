//! ibm_onboarding_catalog_product schema

use sell_core::schema::{AttributeSchema, AttributeType, NestedBlock, ResourceSchema, types};

use super::{
    CATALOG_OBJECT_ID, SellSchemaConfig, catalog_object_attributes, metadata_ui_attribute,
    product_id_attribute, rc_compatible_attribute, service_flags,
};

pub const PRODUCT_KINDS: &[&str] = &["service", "platform_service", "composite", "iaas"];

fn string(name: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::String)
}

/// `{ value, type }` wait time
fn time_interval(name: &str, description: &str) -> AttributeSchema {
    AttributeSchema::new(
        name,
        AttributeType::Block(
            NestedBlock::single()
                .attribute(
                    AttributeSchema::new("value", AttributeType::Float)
                        .with_description("The number of time units."),
                )
                .attribute(string("type").with_description("The unit of the time.")),
        ),
    )
    .with_description(description)
}

fn support_attribute() -> AttributeSchema {
    let escalation = NestedBlock::single()
        .attribute(string("contact").with_description("The support contact."))
        .attribute(time_interval(
            "escalation_wait_time",
            "The time interval of providing answers to questions.",
        ))
        .attribute(time_interval(
            "response_wait_time",
            "The time interval of providing answers to questions.",
        ));

    let times = NestedBlock::list()
        .attribute(
            AttributeSchema::new("day", AttributeType::Float)
                .with_description("The number of days in a week when support is available."),
        )
        .attribute(string("start_time").with_description("The time in the day when support starts."))
        .attribute(string("end_time").with_description("The time in the day when support ends."));
    let availability = NestedBlock::single()
        .attribute(
            AttributeSchema::new("times", AttributeType::Block(times))
                .with_description("The support hours available for the user."),
        )
        .attribute(string("timezone").with_description("The timezones in which support is available."))
        .attribute(
            AttributeSchema::new("always_available", AttributeType::Bool)
                .with_description("Whether the support is always available."),
        );
    let details = NestedBlock::list()
        .attribute(string("type").with_description("The type of support for this support channel."))
        .attribute(string("contact").with_description("The contact information for this support channel."))
        .attribute(time_interval(
            "response_wait_time",
            "The time interval of providing answers to questions.",
        ))
        .attribute(
            AttributeSchema::new("availability", AttributeType::Block(availability))
                .with_description("The time period during which support is available."),
        );

    let support = NestedBlock::single()
        .attribute(string("url").with_description("The support site URL where the support for your service is available."))
        .attribute(string("status_url").with_description("The URL where the status of your service is available."))
        .attribute(
            AttributeSchema::new("locations", types::string_list())
                .with_description("The countries in which your support is available."),
        )
        .attribute(
            AttributeSchema::new("languages", types::string_list())
                .with_description("The languages in which support is available."),
        )
        .attribute(string("process").with_description("The description of your support process."))
        .attribute(
            AttributeSchema::new("process_i18n", types::string_map())
                .with_description("The description of your support process in translation."),
        )
        .attribute(string("support_type").with_description("The type of support provided."))
        .attribute(
            AttributeSchema::new("support_escalation", AttributeType::Block(escalation))
                .with_description("The details of the support escalation process."),
        )
        .attribute(
            AttributeSchema::new("support_details", AttributeType::Block(details))
                .with_description("The support options for the service."),
        );

    AttributeSchema::new(
        "other",
        AttributeType::Block(NestedBlock::single().attribute(
            AttributeSchema::new(
                "pc",
                AttributeType::Block(NestedBlock::single().attribute(
                    AttributeSchema::new("support", AttributeType::Block(support))
                        .with_description("The support metadata of the service."),
                )),
            )
            .with_description("The metadata of the service owned and managed by Partner Center - Sell."),
        )),
    )
    .with_description("The additional metadata of the service in global catalog.")
}

pub fn onboarding_catalog_product_config() -> SellSchemaConfig {
    let metadata = NestedBlock::single()
        .attribute(rc_compatible_attribute())
        .attribute(metadata_ui_attribute())
        .attribute(
            AttributeSchema::new("service", AttributeType::Block(service_flags()))
                .with_description("The global catalog service metadata object."),
        )
        .attribute(support_attribute());

    let schema = catalog_object_attributes(
        types::one_of(PRODUCT_KINDS),
        "The programmatic name of this product.",
    )
    .into_iter()
    .fold(
        ResourceSchema::new("ibm_onboarding_catalog_product")
            .with_description("A global catalog product of an onboarded product.")
            .attribute(product_id_attribute()),
        ResourceSchema::attribute,
    )
    .attribute(
        AttributeSchema::new(
            "images",
            AttributeType::Block(
                NestedBlock::single()
                    .attribute(string("image").with_description("URL to the product image.")),
            ),
        )
        .with_description("Images from the global catalog entry that help illustrate the service."),
    )
    .attribute(
        AttributeSchema::new("metadata", AttributeType::Block(metadata))
            .with_description("The global catalog service metadata object."),
    )
    .attribute(
        string("catalog_product_id")
            .computed()
            .with_description("The ID of a global catalog object."),
    );

    SellSchemaConfig {
        resource_type_name: "ibm_onboarding_catalog_product",
        patch_fields: &[
            "active",
            "disabled",
            "overview_ui",
            "tags",
            "images",
            "object_provider",
            "metadata",
        ],
        id_parts: &["product_id", "catalog_product_id"],
        schema,
    }
}

/// `catalog_product_id` as a required, ForceNew parent reference
pub(crate) fn catalog_product_id_reference() -> AttributeSchema {
    string("catalog_product_id")
        .required()
        .force_new()
        .with_validator(CATALOG_OBJECT_ID)
        .with_description("The unique ID of this global catalog product.")
}
