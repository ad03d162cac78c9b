//! ibm_onboarding_resource_broker schema

use sell_core::schema::{AttributeSchema, AttributeType, NestedBlock, ResourceSchema, types};

use super::{SellSchemaConfig, computed_string, env_attribute};

pub const AUTH_SCHEMES: &[&str] = &["bearer", "bearer-crn"];
pub const BROKER_TYPES: &[&str] = &["provision_through", "provision_behind"];
pub const BROKER_STATES: &[&str] = &["active", "removed"];

fn event_user(name: &str, description: &str) -> AttributeSchema {
    AttributeSchema::new(
        name,
        AttributeType::Block(
            NestedBlock::single()
                .attribute(AttributeSchema::new("user_id", AttributeType::String))
                .attribute(AttributeSchema::new("user_name", AttributeType::String)),
        ),
    )
    .computed()
    .with_description(description)
}

pub fn onboarding_resource_broker_config() -> SellSchemaConfig {
    SellSchemaConfig {
        resource_type_name: "ibm_onboarding_resource_broker",
        patch_fields: &[
            "auth_username",
            "auth_password",
            "auth_scheme",
            "resource_group_crn",
            "state",
            "broker_url",
            "allow_context_updates",
            "catalog_type",
            "region",
        ],
        id_parts: &[],
        schema: ResourceSchema::new("ibm_onboarding_resource_broker")
            .with_description("A resource broker that provisions instances of your service.")
            .attribute(env_attribute())
            .attribute(
                AttributeSchema::new("auth_username", AttributeType::String)
                    .with_description("The authentication username to reach the broker."),
            )
            .attribute(
                AttributeSchema::new("auth_password", AttributeType::String)
                    .sensitive()
                    .with_description("The authentication password to reach the broker."),
            )
            .attribute(
                AttributeSchema::new("auth_scheme", types::one_of(AUTH_SCHEMES))
                    .required()
                    .with_description("The supported authentication scheme for the broker."),
            )
            .attribute(
                AttributeSchema::new("resource_group_crn", AttributeType::String)
                    .with_description("The cloud resource name of the resource group."),
            )
            .attribute(
                AttributeSchema::new("state", types::one_of(BROKER_STATES))
                    .with_description("The state of the broker."),
            )
            .attribute(
                AttributeSchema::new("broker_url", AttributeType::String)
                    .required()
                    .with_description("The URL associated with the broker application."),
            )
            .attribute(
                AttributeSchema::new("allow_context_updates", AttributeType::Bool)
                    .with_description("Whether the resource controller will call the broker for any context changes."),
            )
            .attribute(
                AttributeSchema::new("catalog_type", AttributeType::String)
                    .with_description("To enable the provisioning of your broker, set this parameter value to `service`."),
            )
            .attribute(
                AttributeSchema::new("type", types::one_of(BROKER_TYPES))
                    .required()
                    .force_new()
                    .with_description("The type of the provisioning model."),
            )
            .attribute(
                AttributeSchema::new("name", AttributeType::String)
                    .required()
                    .force_new()
                    .with_description("The name of the broker."),
            )
            .attribute(
                AttributeSchema::new("region", AttributeType::String)
                    .with_description("The region where the pricing plan is available."),
            )
            .attribute(computed_string("account_id", "The ID of the account in which you manage the broker."))
            .attribute(computed_string("crn", "The cloud resource name (CRN) of the broker."))
            .attribute(computed_string("guid", "The globally unique identifier of the broker."))
            .attribute(computed_string("created_at", "The time when the service broker was created."))
            .attribute(computed_string("updated_at", "The time when the service broker was updated."))
            .attribute(event_user("created_by", "The details of the user who created this broker."))
            .attribute(event_user("updated_by", "The details of the user who updated this broker.")),
    }
}
