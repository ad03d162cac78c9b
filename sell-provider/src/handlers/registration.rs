//! ibm_onboarding_registration handlers

use sell_core::provider::ProviderResult;
use sell_core::resource::Attributes;
use sell_core::resource_data::ResourceData;

use super::{Op, apply, forget};
use crate::client::PartnerCenterSellApi;
use crate::convert::MapBuilder;
use crate::models::*;
use crate::schemas::registration::onboarding_registration_config;

pub const RESOURCE: &str = "ibm_onboarding_registration";

fn path(d: &ResourceData) -> RegistrationPath {
    RegistrationPath {
        registration_id: d.id().to_string(),
    }
}

fn state_attributes(registration: &Registration) -> Attributes {
    MapBuilder::new()
        .string("account_id", &registration.account_id)
        .string("company_name", &registration.company_name)
        .block("primary_contact", &registration.primary_contact)
        .string(
            "default_private_catalog_id",
            &registration.default_private_catalog_id,
        )
        .string("provider_access_group", &registration.provider_access_group)
        .string("created_at", &registration.created_at)
        .string("updated_at", &registration.updated_at)
        .build()
}

pub async fn create(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "create");

    let options = CreateRegistrationOptions {
        account_id: d.get_string("account_id"),
        company_name: d.get_string("company_name"),
        primary_contact: op.required_block(d, "primary_contact")?,
        default_private_catalog_id: d.get_string_ok("default_private_catalog_id"),
        provider_access_group: d.get_string_ok("provider_access_group"),
    };

    let response = client
        .create_registration(&options)
        .await
        .map_err(|e| op.sdk("create_registration", e))?;

    d.set_id(op.created_id(response.result.id.as_deref())?);
    log::info!("Created {} {}", RESOURCE, d.id());

    read(client, d).await
}

pub async fn read(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "read");

    let registration = match client.get_registration(&path(d)).await {
        Ok(response) => response.result,
        Err(e) if e.is_not_found() => {
            forget(d, op);
            return Ok(());
        }
        Err(e) => return Err(op.sdk("get_registration", e)),
    };

    apply(d, state_attributes(&registration));
    Ok(())
}

pub async fn update(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "update");
    let config = onboarding_registration_config();
    op.check_force_new(d, &config)?;

    let mut patch = RegistrationPatch::default();
    let mut has_change = false;

    if d.has_change("company_name") {
        patch.company_name = Some(d.get_string("company_name"));
        has_change = true;
    }
    if d.has_change("primary_contact") {
        patch.primary_contact = op.block(d, "primary_contact")?;
        has_change = true;
    }
    if d.has_change("default_private_catalog_id") {
        patch.default_private_catalog_id = d.get_string_ok("default_private_catalog_id");
        has_change = true;
    }
    if d.has_change("provider_access_group") {
        patch.provider_access_group = d.get_string_ok("provider_access_group");
        has_change = true;
    }

    if has_change {
        let body = op.patch(&patch, &config, d)?;
        client
            .update_registration(&path(d), body)
            .await
            .map_err(|e| op.sdk("update_registration", e))?;
        log::info!("Updated {} {}", RESOURCE, d.id());
    }

    read(client, d).await
}

pub async fn delete(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "delete");

    client
        .delete_registration(&path(d))
        .await
        .map_err(|e| op.sdk("delete_registration", e))?;
    log::info!("Deleted {} {}", RESOURCE, d.id());

    d.set_id("");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use sell_core::resource::Value;
    use serde_json::json;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    fn planned() -> Attributes {
        let mut contact = Attributes::new();
        contact.insert("name".to_string(), s("Petra Novak"));
        contact.insert("email".to_string(), s("petra@example.com"));
        let mut attrs = Attributes::new();
        attrs.insert("account_id".to_string(), s("4a5c3c51b97a446fbb1d0e1ef089823b"));
        attrs.insert("company_name".to_string(), s("Example Corp"));
        attrs.insert("primary_contact".to_string(), Value::block(contact));
        attrs.insert("provider_access_group".to_string(), s("AccessGroupId-1"));
        attrs
    }

    #[tokio::test]
    async fn create_then_read_fills_timestamps() {
        let api = MockApi::new();
        let mut d = ResourceData::new(planned());

        create(api.as_ref(), &mut d).await.unwrap();

        assert_eq!(d.id(), "registration-1");
        assert_eq!(d.get("created_at"), Some(&s("2026-10-16T08:00:00Z")));
        assert_eq!(d.get("company_name"), Some(&s("Example Corp")));
        assert!(api.calls().iter().all(|c| c.env.is_none()));
    }

    #[tokio::test]
    async fn update_sends_changed_fields_only() {
        let api = MockApi::new();
        let mut d = ResourceData::new(planned());
        create(api.as_ref(), &mut d).await.unwrap();

        let mut desired = d.attributes().clone();
        desired.insert("company_name".to_string(), s("Example Holdings"));
        desired.remove("provider_access_group");
        let mut d = ResourceData::with_prior(d.id(), d.attributes().clone(), desired);

        update(api.as_ref(), &mut d).await.unwrap();

        let patch = api.last_patch("update_registration").unwrap();
        assert_eq!(
            serde_json::Value::Object(patch),
            json!({ "company_name": "Example Holdings", "provider_access_group": null })
        );
        assert_eq!(d.get("company_name"), Some(&s("Example Holdings")));
    }

    #[tokio::test]
    async fn account_change_requires_replacement() {
        let api = MockApi::new();
        let mut d = ResourceData::new(planned());
        create(api.as_ref(), &mut d).await.unwrap();

        let mut desired = d.attributes().clone();
        desired.insert("account_id".to_string(), s("other-account"));
        let mut d = ResourceData::with_prior(d.id(), d.attributes().clone(), desired);

        let err = update(api.as_ref(), &mut d).await.unwrap_err();
        assert_eq!(
            err.message,
            "Cannot update resource property \"account_id\" with the ForceNew annotation. \
             The resource must be re-created to update this property."
        );
    }

    #[tokio::test]
    async fn vanished_registration_is_forgotten() {
        let api = MockApi::new();
        let mut d = ResourceData::existing("registration-9", planned());

        read(api.as_ref(), &mut d).await.unwrap();
        assert!(!d.is_tracked());
    }
}
