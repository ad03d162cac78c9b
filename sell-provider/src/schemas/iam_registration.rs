//! ibm_onboarding_iam_registration schema

use sell_core::schema::{AttributeSchema, AttributeType, NestedBlock, ResourceSchema, types};

use super::{SellSchemaConfig, env_attribute, i18n_strings_block, product_id_attribute};

pub const SERVICE_TYPES: &[&str] = &["service", "platform_service"];

fn i18n(name: &str, description: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::Block(i18n_strings_block()))
        .with_description(description)
}

fn actions_attribute() -> AttributeSchema {
    let options = NestedBlock::single().attribute(
        AttributeSchema::new("hidden", AttributeType::Bool)
            .with_description("Optional opt-in if action is hidden from customers."),
    );
    let actions = NestedBlock::list()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .with_description("The unique identifier for the action."),
        )
        .attribute(
            AttributeSchema::new("roles", types::string_list())
                .with_description("The list of roles for the action."),
        )
        .attribute(i18n("description", "The description for the object."))
        .attribute(i18n("display_name", "The display name of the object."))
        .attribute(
            AttributeSchema::new("options", AttributeType::Block(options))
                .with_description("Extra options."),
        );
    AttributeSchema::new("actions", AttributeType::Block(actions))
        .with_description("The product access management action.")
}

fn supported_roles_attribute() -> AttributeSchema {
    let options = NestedBlock::single()
        .attribute(
            AttributeSchema::new("access_policy", AttributeType::Bool)
                .with_description("Optional opt-in to require access control on the role."),
        )
        .attribute(
            AttributeSchema::new("policy_type", types::string_list())
                .with_description("Optional opt-in to require checking policy type when applying the role."),
        )
        .attribute(
            AttributeSchema::new("account_type", AttributeType::String)
                .with_description("Optional opt-in to require checking account type when applying the role."),
        );
    let roles = NestedBlock::list()
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .with_description("The value belonging to the key."),
        )
        .attribute(i18n("description", "The description for the object."))
        .attribute(i18n("display_name", "The display name of the object."))
        .attribute(
            AttributeSchema::new("options", AttributeType::Block(options))
                .with_description("The supported role options."),
        );
    AttributeSchema::new("supported_roles", AttributeType::Block(roles))
        .with_description("The list of roles that you can use to assign access.")
}

fn supported_network_attribute() -> AttributeSchema {
    let options = NestedBlock::single().attribute(
        AttributeSchema::new("hidden", AttributeType::Bool)
            .with_description("Whether the attribute is hidden or not."),
    );
    let attributes = NestedBlock::list()
        .attribute(
            AttributeSchema::new("key", AttributeType::String)
                .with_description("The name of the key."),
        )
        .attribute(
            AttributeSchema::new("values", types::string_list())
                .with_description("The list of values that belong to the key."),
        )
        .attribute(
            AttributeSchema::new("options", AttributeType::Block(options))
                .with_description("The list of options for the environment attribute."),
        );
    AttributeSchema::new(
        "supported_network",
        AttributeType::Block(NestedBlock::single().attribute(
            AttributeSchema::new("environment_attributes", AttributeType::Block(attributes))
                .with_description("The environment attribute for support."),
        )),
    )
    .with_description("The registration of set of endpoint types that are supported by your service.")
}

fn supported_anonymous_accesses_attribute() -> AttributeSchema {
    let attributes = NestedBlock::single()
        .attribute(
            AttributeSchema::new("account_id", AttributeType::String)
                .required()
                .with_description("An account id."),
        )
        .attribute(
            AttributeSchema::new("service_name", AttributeType::String)
                .required()
                .with_description("The name of the service."),
        )
        .attribute(
            AttributeSchema::new("additional_properties", types::string_map())
                .with_description("Additional properties; keys come from a predefined list."),
        );
    let accesses = NestedBlock::list()
        .attribute(
            AttributeSchema::new("attributes", AttributeType::Block(attributes))
                .with_description("The attributes for anonymous accesses."),
        )
        .attribute(
            AttributeSchema::new("roles", types::string_list())
                .with_description("The roles of supported anonymous accesses."),
        );
    AttributeSchema::new("supported_anonymous_accesses", AttributeType::Block(accesses))
        .with_description("The list of supported anonymous accesses.")
}

fn supported_attribute_options() -> AttributeSchema {
    let hierarchy_key = NestedBlock::single()
        .attribute(
            AttributeSchema::new("key", AttributeType::String)
                .with_description("The key of the resource hierarchy key."),
        )
        .attribute(
            AttributeSchema::new("value", AttributeType::String)
                .with_description("The value of the resource hierarchy key."),
        );
    let hierarchy_value = NestedBlock::single().attribute(
        AttributeSchema::new("key", AttributeType::String)
            .with_description("The key of the resource hierarchy value."),
    );
    let hierarchy = NestedBlock::single()
        .attribute(
            AttributeSchema::new("key", AttributeType::Block(hierarchy_key))
                .with_description("Hierarchy description key."),
        )
        .attribute(
            AttributeSchema::new("value", AttributeType::Block(hierarchy_value))
                .with_description("Hierarchy description value."),
        );
    let options = NestedBlock::single()
        .attribute(
            AttributeSchema::new("operators", types::string_list())
                .with_description("The supported attribute operator."),
        )
        .attribute(
            AttributeSchema::new("hidden", AttributeType::Bool)
                .with_description("Optional opt-in if attribute is hidden from customers."),
        )
        .attribute(
            AttributeSchema::new("supported_patterns", types::string_list())
                .with_description("The list of supported patterns."),
        )
        .attribute(
            AttributeSchema::new("policy_types", types::string_list())
                .with_description("The list of policy types."),
        )
        .attribute(
            AttributeSchema::new("is_empty_value_supported", AttributeType::Bool)
                .with_description("Indicate whether the empty value is supported."),
        )
        .attribute(
            AttributeSchema::new("is_string_exists_false_value_supported", AttributeType::Bool)
                .with_description("Indicate whether the false value is supported for stringExists operator."),
        )
        .attribute(
            AttributeSchema::new("key", AttributeType::String)
                .with_description("The name of attribute."),
        )
        .attribute(
            AttributeSchema::new("resource_hierarchy", AttributeType::Block(hierarchy))
                .with_description("Resource hierarchy options for composite services."),
        );
    AttributeSchema::new("options", AttributeType::Block(options))
        .with_description("The list of support attribute options.")
}

fn supported_attribute_ui() -> AttributeSchema {
    let value = NestedBlock::list()
        .attribute(
            AttributeSchema::new("value", AttributeType::String)
                .with_description("The values of input details."),
        )
        .attribute(i18n("display_name", "The display name of the object."));
    let gst = NestedBlock::single()
        .attribute(
            AttributeSchema::new("query", AttributeType::String)
                .with_description("The query to use."),
        )
        .attribute(
            AttributeSchema::new("value_property_name", AttributeType::String)
                .with_description("The value of the property name."),
        )
        .attribute(
            AttributeSchema::new("label_property_name", AttributeType::String)
                .with_description("One of labelPropertyName or inputOptionLabel is required."),
        )
        .attribute(
            AttributeSchema::new("input_option_label", AttributeType::String)
                .with_description("One of labelPropertyName or inputOptionLabel is required."),
        );
    let url = NestedBlock::single()
        .attribute(
            AttributeSchema::new("url_endpoint", AttributeType::String)
                .with_description("The URL of the user interface."),
        )
        .attribute(
            AttributeSchema::new("input_option_label", AttributeType::String)
                .with_description("The label options for the user interface URL."),
        );
    let details = NestedBlock::single()
        .attribute(
            AttributeSchema::new("type", AttributeType::String)
                .required()
                .with_description("The type of the input details."),
        )
        .attribute(
            AttributeSchema::new("values", AttributeType::Block(value))
                .with_description("The provided values of input details."),
        )
        .attribute(
            AttributeSchema::new("gst", AttributeType::Block(gst))
                .with_description("Required if type is gst."),
        )
        .attribute(
            AttributeSchema::new("url", AttributeType::Block(url))
                .with_description("The user interface URL of the input details."),
        );
    let ui = NestedBlock::single()
        .attribute(
            AttributeSchema::new("input_type", AttributeType::String)
                .required()
                .with_description("The type of the input."),
        )
        .attribute(
            AttributeSchema::new("input_details", AttributeType::Block(details))
                .with_description("The details of the input."),
        );
    AttributeSchema::new("ui", AttributeType::Block(ui))
        .with_description("The user interface.")
}

fn supported_attributes_attribute() -> AttributeSchema {
    let attributes = NestedBlock::list()
        .attribute(
            AttributeSchema::new("key", AttributeType::String)
                .with_description("The supported attribute key."),
        )
        .attribute(supported_attribute_options())
        .attribute(i18n("display_name", "The display name of the object."))
        .attribute(i18n("description", "The description for the object."))
        .attribute(supported_attribute_ui());
    AttributeSchema::new("supported_attributes", AttributeType::Block(attributes))
        .with_description("The list of supported attributes.")
}

fn supported_authorization_subjects_attribute() -> AttributeSchema {
    let attributes = NestedBlock::single()
        .attribute(
            AttributeSchema::new("service_name", AttributeType::String)
                .with_description("The name of the service."),
        )
        .attribute(
            AttributeSchema::new("resource_type", AttributeType::String)
                .with_description("The type of the service."),
        );
    let subjects = NestedBlock::list()
        .attribute(
            AttributeSchema::new("attributes", AttributeType::Block(attributes))
                .with_description("The list of supported authorization subject properties."),
        )
        .attribute(
            AttributeSchema::new("roles", types::string_list())
                .with_description("The list of roles for authorization."),
        );
    AttributeSchema::new("supported_authorization_subjects", AttributeType::Block(subjects))
        .with_description("The list of supported authorization subjects.")
}

fn resource_hierarchy_attribute() -> AttributeSchema {
    AttributeSchema::new(
        "resource_hierarchy_attribute",
        AttributeType::Block(
            NestedBlock::single()
                .attribute(
                    AttributeSchema::new("key", AttributeType::String)
                        .with_description("The hierarchy key."),
                )
                .attribute(
                    AttributeSchema::new("value", AttributeType::String)
                        .with_description("The hierarchy value."),
                ),
        ),
    )
    .with_description("The resource hierarchy key-value pair for composite services.")
}

pub fn onboarding_iam_registration_config() -> SellSchemaConfig {
    SellSchemaConfig {
        resource_type_name: "ibm_onboarding_iam_registration",
        patch_fields: &[
            "enabled",
            "service_type",
            "actions",
            "additional_policy_scopes",
            "display_name",
            "parent_ids",
            "resource_hierarchy_attribute",
            "supported_anonymous_accesses",
            "supported_attributes",
            "supported_authorization_subjects",
            "supported_roles",
            "supported_network",
        ],
        id_parts: &["product_id", "name"],
        schema: ResourceSchema::new("ibm_onboarding_iam_registration")
            .with_description("The IAM registration of an onboarded product.")
            .attribute(product_id_attribute())
            .attribute(env_attribute())
            .attribute(
                AttributeSchema::new("name", AttributeType::String)
                    .required()
                    .force_new()
                    .with_description("The IAM registration name, which must be the programmatic name of the product."),
            )
            .attribute(
                AttributeSchema::new("enabled", AttributeType::Bool)
                    .with_description("Whether the service is enabled or disabled for IAM."),
            )
            .attribute(
                AttributeSchema::new("service_type", types::one_of(SERVICE_TYPES))
                    .with_description("The type of the service."),
            )
            .attribute(actions_attribute())
            .attribute(
                AttributeSchema::new("additional_policy_scopes", types::string_list())
                    .with_description("List of additional policy scopes."),
            )
            .attribute(i18n("display_name", "The display name of the object."))
            .attribute(
                AttributeSchema::new("parent_ids", types::string_list())
                    .with_description("The list of parent IDs for product access management."),
            )
            .attribute(resource_hierarchy_attribute())
            .attribute(supported_anonymous_accesses_attribute())
            .attribute(supported_attributes_attribute())
            .attribute(supported_authorization_subjects_attribute())
            .attribute(supported_roles_attribute())
            .attribute(supported_network_attribute()),
    }
}
