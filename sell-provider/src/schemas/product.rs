//! ibm_onboarding_product schema

use sell_core::schema::{AttributeSchema, AttributeType, NestedBlock, ResourceSchema, types};

use super::{SellSchemaConfig, computed_string, env_attribute, primary_contact_attribute};

pub const PRODUCT_TYPES: &[&str] = &["software", "service", "professional_service"];

pub fn onboarding_product_config() -> SellSchemaConfig {
    let escalation_contacts = NestedBlock::list()
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .with_description("The name of the support escalation contact."),
        )
        .attribute(
            AttributeSchema::new("email", AttributeType::String)
                .with_description("The email address of the support escalation contact."),
        )
        .attribute(
            AttributeSchema::new("role", AttributeType::String)
                .with_description("The role of the support escalation contact."),
        );

    SellSchemaConfig {
        resource_type_name: "ibm_onboarding_product",
        patch_fields: &[
            "primary_contact",
            "eccn_number",
            "ero_class",
            "unspsc",
            "tax_assessment",
            "support",
        ],
        id_parts: &[],
        schema: ResourceSchema::new("ibm_onboarding_product")
            .with_description("A product onboarded to Partner Center Sell.")
            .attribute(env_attribute())
            .attribute(
                AttributeSchema::new("type", types::one_of(PRODUCT_TYPES))
                    .required()
                    .force_new()
                    .with_description("The type of the product."),
            )
            .attribute(primary_contact_attribute(
                "The primary contact for your product.",
            ))
            .attribute(
                AttributeSchema::new("eccn_number", AttributeType::String)
                    .with_description("The Export Control Classification Number of your product."),
            )
            .attribute(
                AttributeSchema::new("ero_class", AttributeType::String)
                    .with_description("The ERO class of your product."),
            )
            .attribute(
                AttributeSchema::new("unspsc", AttributeType::Float)
                    .with_description("The United Nations Standard Products and Services Code of your product."),
            )
            .attribute(
                AttributeSchema::new("tax_assessment", AttributeType::String)
                    .with_description("The tax assessment type of your product."),
            )
            .attribute(
                AttributeSchema::new(
                    "support",
                    AttributeType::Block(NestedBlock::single().attribute(
                        AttributeSchema::new("escalation_contacts", AttributeType::Block(escalation_contacts))
                            .with_description("The list of contacts in case of support escalations."),
                    )),
                )
                .with_description("The support information that is not displayed in the catalog."),
            )
            .attribute(computed_string("account_id", "The IBM Cloud account ID of the provider."))
            .attribute(computed_string("private_catalog_id", "The ID of a digital platform object in the private catalog."))
            .attribute(computed_string("private_catalog_offering_id", "The ID of the private catalog offering."))
            .attribute(computed_string("global_catalog_offering_id", "The ID of a global catalog object."))
            .attribute(computed_string("staging_global_catalog_offering_id", "The ID of a global catalog object in the staging environment."))
            .attribute(computed_string("approver_resource_id", "The ID of the approval access group."))
            .attribute(computed_string("iam_registration_id", "IAM registration identifier.")),
    }
}
