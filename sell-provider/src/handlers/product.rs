//! ibm_onboarding_product handlers
//!
//! The resource ID is the product ID assigned by the service.

use sell_core::provider::ProviderResult;
use sell_core::resource::{Attributes, Value};
use sell_core::resource_data::ResourceData;

use super::{Op, apply, forget};
use crate::client::PartnerCenterSellApi;
use crate::convert::MapBuilder;
use crate::models::*;
use crate::schemas::product::onboarding_product_config;

pub const RESOURCE: &str = "ibm_onboarding_product";

fn path(d: &ResourceData) -> ProductPath {
    ProductPath {
        product_id: d.id().to_string(),
        env: d.get_string_ok("env"),
    }
}

fn state_attributes(product: &OnboardingProduct) -> Attributes {
    MapBuilder::new()
        .string("type", &product.product_type)
        .block("primary_contact", &product.primary_contact)
        .string("eccn_number", &product.eccn_number)
        .string("ero_class", &product.ero_class)
        .float("unspsc", &product.unspsc)
        .string("tax_assessment", &product.tax_assessment)
        .block("support", &product.support)
        .string("account_id", &product.account_id)
        .string("private_catalog_id", &product.private_catalog_id)
        .string("private_catalog_offering_id", &product.private_catalog_offering_id)
        .string("global_catalog_offering_id", &product.global_catalog_offering_id)
        .string(
            "staging_global_catalog_offering_id",
            &product.staging_global_catalog_offering_id,
        )
        .string("approver_resource_id", &product.approver_resource_id)
        .string("iam_registration_id", &product.iam_registration_id)
        .build()
}

pub async fn create(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "create");

    let options = CreateOnboardingProductOptions {
        env: d.get_string_ok("env"),
        product_type: d.get_string("type"),
        primary_contact: op.required_block(d, "primary_contact")?,
        eccn_number: d.get_string_ok("eccn_number"),
        ero_class: d.get_string_ok("ero_class"),
        unspsc: d.get_float_ok("unspsc"),
        tax_assessment: d.get_string_ok("tax_assessment"),
        support: op.block(d, "support")?,
    };

    let response = client
        .create_onboarding_product(&options)
        .await
        .map_err(|e| op.sdk("create_onboarding_product", e))?;

    d.set_id(op.created_id(response.result.id.as_deref())?);
    log::info!("Created {} {}", RESOURCE, d.id());

    read(client, d).await
}

pub async fn read(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "read");

    let product = match client.get_onboarding_product(&path(d)).await {
        Ok(response) => response.result,
        Err(e) if e.is_not_found() => {
            forget(d, op);
            return Ok(());
        }
        Err(e) => return Err(op.sdk("get_onboarding_product", e)),
    };

    apply(d, state_attributes(&product));
    Ok(())
}

pub async fn update(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "update");
    let config = onboarding_product_config();
    op.check_force_new(d, &config)?;

    let mut patch = OnboardingProductPatch::default();
    let mut has_change = false;

    if d.has_change("primary_contact") {
        patch.primary_contact = op.block(d, "primary_contact")?;
        has_change = true;
    }
    if d.has_change("eccn_number") {
        patch.eccn_number = d.get_string_ok("eccn_number");
        has_change = true;
    }
    if d.has_change("ero_class") {
        patch.ero_class = d.get_string_ok("ero_class");
        has_change = true;
    }
    if d.has_change("unspsc") {
        patch.unspsc = d.get_float_ok("unspsc");
        has_change = true;
    }
    if d.has_change("tax_assessment") {
        patch.tax_assessment = d.get_string_ok("tax_assessment");
        has_change = true;
    }
    if d.has_change("support") {
        patch.support = op.block(d, "support")?;
        has_change = true;
    }

    if has_change {
        let body = op.patch(&patch, &config, d)?;
        client
            .update_onboarding_product(&path(d), body)
            .await
            .map_err(|e| op.sdk("update_onboarding_product", e))?;
        log::info!("Updated {} {}", RESOURCE, d.id());
    }

    read(client, d).await
}

pub async fn delete(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "delete");

    client
        .delete_onboarding_product(&path(d))
        .await
        .map_err(|e| op.sdk("delete_onboarding_product", e))?;
    log::info!("Deleted {} {}", RESOURCE, d.id());

    d.set_id("");
    Ok(())
}

/// Planned attributes of a minimal software product, shared with other handler tests
#[cfg(test)]
pub(crate) fn sample_attributes() -> Attributes {
    let mut contact = Attributes::new();
    contact.insert("name".to_string(), Value::String("Petra Novak".to_string()));
    contact.insert(
        "email".to_string(),
        Value::String("petra@example.com".to_string()),
    );
    let mut attrs = Attributes::new();
    attrs.insert("type".to_string(), Value::String("software".to_string()));
    attrs.insert("primary_contact".to_string(), Value::block(contact));
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SdkError;
    use crate::testing::{MockApi, PRODUCT_ID};
    use serde_json::json;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    #[tokio::test]
    async fn create_uses_service_assigned_id() {
        let api = MockApi::new();
        let mut attrs = sample_attributes();
        attrs.insert("tax_assessment".to_string(), s("PAAS"));
        let mut d = ResourceData::new(attrs);

        create(api.as_ref(), &mut d).await.unwrap();

        assert_eq!(d.id(), PRODUCT_ID);
        assert_eq!(d.get("tax_assessment"), Some(&s("PAAS")));
        assert_eq!(d.get("private_catalog_id"), Some(&s("pc-1")));
        assert_eq!(d.get("primary_contact.0.email"), Some(&s("petra@example.com")));
        assert!(d.get("eccn_number").is_none());
    }

    #[tokio::test]
    async fn missing_primary_contact_fails_before_calling_the_service() {
        let api = MockApi::new();
        let mut attrs = sample_attributes();
        attrs.remove("primary_contact");
        let mut d = ResourceData::new(attrs);

        let err = create(api.as_ref(), &mut d).await.unwrap_err();
        assert_eq!(err.step(), Some("parse-primary_contact"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn clearing_an_optional_field_sends_null() {
        let api = MockApi::new();
        let mut attrs = sample_attributes();
        attrs.insert("eccn_number".to_string(), s("5D992"));
        let mut d = ResourceData::new(attrs);
        create(api.as_ref(), &mut d).await.unwrap();

        let mut desired = d.attributes().clone();
        desired.remove("eccn_number");
        desired.insert("ero_class".to_string(), s("A6VR"));
        let mut d = ResourceData::with_prior(d.id(), d.attributes().clone(), desired);

        update(api.as_ref(), &mut d).await.unwrap();

        let patch = api.last_patch("update_onboarding_product").unwrap();
        assert_eq!(
            serde_json::Value::Object(patch),
            json!({ "eccn_number": null, "ero_class": "A6VR" })
        );
        assert!(d.get("eccn_number").is_none());
        assert_eq!(d.get("ero_class"), Some(&s("A6VR")));
    }

    #[tokio::test]
    async fn integral_unspsc_is_not_resent() {
        let api = MockApi::new();
        let mut attrs = sample_attributes();
        attrs.insert("unspsc".to_string(), Value::Int(43230000));
        let mut d = ResourceData::new(attrs.clone());
        create(api.as_ref(), &mut d).await.unwrap();
        assert_eq!(d.get("unspsc"), Some(&Value::Float(43230000.0)));

        let mut d = ResourceData::with_prior(d.id(), d.attributes().clone(), attrs);
        assert!(!d.has_change("unspsc"));
        update(api.as_ref(), &mut d).await.unwrap();

        assert!(api.last_patch("update_onboarding_product").is_none());
        assert!(!api.call_names().contains(&"update_onboarding_product"));
    }

    #[tokio::test]
    async fn create_without_returned_id_fails() {
        let api = MockApi::new();
        api.answer_without_ids();
        let mut d = ResourceData::new(sample_attributes());

        let err = create(api.as_ref(), &mut d).await.unwrap_err();
        assert_eq!(err.step(), Some("create"));
        assert_eq!(api.call_names(), vec!["create_onboarding_product"]);
    }

    #[tokio::test]
    async fn read_fills_state_from_the_service() {
        let api = MockApi::new();
        api.seed(
            &format!("product/{}", PRODUCT_ID),
            &OnboardingProduct {
                id: Some(PRODUCT_ID.to_string()),
                product_type: Some("service".to_string()),
                ero_class: Some("A6VR".to_string()),
                unspsc: Some(43230000.0),
                iam_registration_id: Some("pet-store".to_string()),
                ..Default::default()
            },
        );
        let mut d = ResourceData::existing(PRODUCT_ID, Attributes::new());

        read(api.as_ref(), &mut d).await.unwrap();

        assert!(d.is_tracked());
        assert_eq!(d.get("type"), Some(&s("service")));
        assert_eq!(d.get("ero_class"), Some(&s("A6VR")));
        assert_eq!(d.get("unspsc"), Some(&Value::Float(43230000.0)));
        assert_eq!(d.get("iam_registration_id"), Some(&s("pet-store")));
        assert!(d.get("primary_contact").is_none());
    }

    #[tokio::test]
    async fn changing_type_requires_replacement() {
        let api = MockApi::new();
        let mut d = ResourceData::new(sample_attributes());
        create(api.as_ref(), &mut d).await.unwrap();

        let mut desired = d.attributes().clone();
        desired.insert("type".to_string(), s("service"));
        let mut d = ResourceData::with_prior(d.id(), d.attributes().clone(), desired);

        let err = update(api.as_ref(), &mut d).await.unwrap_err();
        assert_eq!(err.step(), Some("type-forces-new"));
    }

    #[tokio::test]
    async fn read_errors_other_than_not_found_are_returned() {
        let api = MockApi::new();
        api.fail(
            "get_onboarding_product",
            SdkError::with_status(500, "Internal Server Error"),
        );
        let mut d = ResourceData::existing(PRODUCT_ID, Attributes::new());

        let err = read(api.as_ref(), &mut d).await.unwrap_err();
        assert_eq!(
            err.message,
            "GetOnboardingProductWithContext failed: Internal Server Error"
        );
        assert!(d.is_tracked());
    }

    #[tokio::test]
    async fn delete_untracks_product() {
        let api = MockApi::new();
        let mut d = ResourceData::new(sample_attributes());
        create(api.as_ref(), &mut d).await.unwrap();

        delete(api.as_ref(), &mut d).await.unwrap();
        assert!(!d.is_tracked());
        assert!(api.stored(&format!("product/{}", PRODUCT_ID)).is_none());
    }
}
