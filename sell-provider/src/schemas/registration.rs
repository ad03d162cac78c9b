//! ibm_onboarding_registration schema

use sell_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

use super::{SellSchemaConfig, computed_string, primary_contact_attribute};

pub fn onboarding_registration_config() -> SellSchemaConfig {
    SellSchemaConfig {
        resource_type_name: "ibm_onboarding_registration",
        patch_fields: &[
            "company_name",
            "primary_contact",
            "default_private_catalog_id",
            "provider_access_group",
        ],
        id_parts: &[],
        schema: ResourceSchema::new("ibm_onboarding_registration")
            .with_description("Registration of a partner account in Partner Center Sell.")
            .attribute(
                AttributeSchema::new("account_id", AttributeType::String)
                    .required()
                    .force_new()
                    .with_description("The ID of your account."),
            )
            .attribute(
                AttributeSchema::new("company_name", AttributeType::String)
                    .required()
                    .with_description("The name of your company that is displayed in the IBM Cloud catalog."),
            )
            .attribute(primary_contact_attribute("The primary contact for your company."))
            .attribute(
                AttributeSchema::new("default_private_catalog_id", AttributeType::String)
                    .with_description("The default private catalog in which products are created."),
            )
            .attribute(
                AttributeSchema::new("provider_access_group", AttributeType::String)
                    .with_description("The onboarding access group for your team."),
            )
            .attribute(computed_string("created_at", "The time when the registration was created."))
            .attribute(computed_string("updated_at", "The time when the registration was updated.")),
    }
}
