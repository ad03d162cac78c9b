//! ibm_onboarding_iam_registration handlers
//!
//! The registration is addressed by its product and programmatic name, so
//! the resource ID is `<product_id>/<name>`.

use sell_core::ident::join_id_parts;
use sell_core::provider::ProviderResult;
use sell_core::resource::{Attributes, Value};
use sell_core::resource_data::ResourceData;

use super::{Op, apply, forget};
use crate::client::PartnerCenterSellApi;
use crate::convert::MapBuilder;
use crate::models::*;
use crate::schemas::iam_registration::onboarding_iam_registration_config;

pub const RESOURCE: &str = "ibm_onboarding_iam_registration";

const ID_PARTS: [&str; 2] = ["product_id", "name"];

fn path(parts: &[String], d: &ResourceData) -> IamRegistrationPath {
    IamRegistrationPath {
        product_id: parts[0].clone(),
        programmatic_name: parts[1].clone(),
        env: d.get_string_ok("env"),
    }
}

fn state_attributes(registration: &IamServiceRegistration) -> Attributes {
    MapBuilder::new()
        .string("name", &registration.name)
        .boolean("enabled", &registration.enabled)
        .string("service_type", &registration.service_type)
        .blocks("actions", &registration.actions)
        .strings(
            "additional_policy_scopes",
            &registration.additional_policy_scopes,
        )
        .block("display_name", &registration.display_name)
        .strings("parent_ids", &registration.parent_ids)
        .block(
            "resource_hierarchy_attribute",
            &registration.resource_hierarchy_attribute,
        )
        .blocks(
            "supported_anonymous_accesses",
            &registration.supported_anonymous_accesses,
        )
        .blocks("supported_attributes", &registration.supported_attributes)
        .blocks(
            "supported_authorization_subjects",
            &registration.supported_authorization_subjects,
        )
        .blocks("supported_roles", &registration.supported_roles)
        .block("supported_network", &registration.supported_network)
        .build()
}

fn string_list_ok(d: &ResourceData, key: &str) -> Option<Vec<String>> {
    d.get_ok(key).map(|_| d.get_string_list(key))
}

pub async fn create(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "create");

    let options = CreateIamRegistrationOptions {
        product_id: d.get_string("product_id"),
        name: d.get_string("name"),
        env: d.get_string_ok("env"),
        enabled: d.get_ok("enabled").and_then(Value::as_bool),
        service_type: d.get_string_ok("service_type"),
        actions: op.blocks(d, "actions")?,
        additional_policy_scopes: string_list_ok(d, "additional_policy_scopes"),
        display_name: op.block(d, "display_name")?,
        parent_ids: string_list_ok(d, "parent_ids"),
        resource_hierarchy_attribute: op.block(d, "resource_hierarchy_attribute")?,
        supported_anonymous_accesses: op.blocks(d, "supported_anonymous_accesses")?,
        supported_attributes: op.blocks(d, "supported_attributes")?,
        supported_authorization_subjects: op.blocks(d, "supported_authorization_subjects")?,
        supported_roles: op.blocks(d, "supported_roles")?,
        supported_network: op.block(d, "supported_network")?,
    };

    let response = client
        .create_iam_registration(&options)
        .await
        .map_err(|e| op.sdk("create_iam_registration", e))?;

    d.set_id(join_id_parts(&[
        options.product_id.as_str(),
        op.created_id(response.result.name.as_deref())?.as_str(),
    ]));
    log::info!("Created {} {}", RESOURCE, d.id());

    read(client, d).await
}

pub async fn read(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "read");
    let parts = op.id_parts(d, ID_PARTS.len())?;

    let registration = match client.get_iam_registration(&path(&parts, d)).await {
        Ok(response) => response.result,
        Err(e) if e.is_not_found() => {
            forget(d, op);
            return Ok(());
        }
        Err(e) => return Err(op.sdk("get_iam_registration", e)),
    };

    apply(d, state_attributes(&registration));
    for (name, part) in ID_PARTS.iter().zip(parts) {
        if !part.is_empty() {
            d.set(*name, Value::String(part));
        }
    }
    Ok(())
}

pub async fn update(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "update");
    let config = onboarding_iam_registration_config();
    let parts = op.id_parts(d, ID_PARTS.len())?;
    op.check_force_new(d, &config)?;

    let mut patch = IamServiceRegistrationPatch::default();
    let mut has_change = false;

    if d.has_change("enabled") {
        patch.enabled = Some(d.get_bool("enabled"));
        has_change = true;
    }
    if d.has_change("service_type") {
        patch.service_type = d.get_string_ok("service_type");
        has_change = true;
    }
    if d.has_change("actions") {
        patch.actions = op.blocks(d, "actions")?;
        has_change = true;
    }
    if d.has_change("additional_policy_scopes") {
        patch.additional_policy_scopes = string_list_ok(d, "additional_policy_scopes");
        has_change = true;
    }
    if d.has_change("display_name") {
        patch.display_name = op.block(d, "display_name")?;
        has_change = true;
    }
    if d.has_change("parent_ids") {
        patch.parent_ids = string_list_ok(d, "parent_ids");
        has_change = true;
    }
    if d.has_change("resource_hierarchy_attribute") {
        patch.resource_hierarchy_attribute = op.block(d, "resource_hierarchy_attribute")?;
        has_change = true;
    }
    if d.has_change("supported_anonymous_accesses") {
        patch.supported_anonymous_accesses = op.blocks(d, "supported_anonymous_accesses")?;
        has_change = true;
    }
    if d.has_change("supported_attributes") {
        patch.supported_attributes = op.blocks(d, "supported_attributes")?;
        has_change = true;
    }
    if d.has_change("supported_authorization_subjects") {
        patch.supported_authorization_subjects =
            op.blocks(d, "supported_authorization_subjects")?;
        has_change = true;
    }
    if d.has_change("supported_roles") {
        patch.supported_roles = op.blocks(d, "supported_roles")?;
        has_change = true;
    }
    if d.has_change("supported_network") {
        patch.supported_network = op.block(d, "supported_network")?;
        has_change = true;
    }

    if has_change {
        let body = op.patch(&patch, &config, d)?;
        client
            .update_iam_registration(&path(&parts, d), body)
            .await
            .map_err(|e| op.sdk("update_iam_registration", e))?;
        log::info!("Updated {} {}", RESOURCE, d.id());
    }

    read(client, d).await
}

pub async fn delete(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "delete");
    let parts = op.id_parts(d, ID_PARTS.len())?;

    client
        .delete_iam_registration(&path(&parts, d))
        .await
        .map_err(|e| op.sdk("delete_iam_registration", e))?;
    log::info!("Deleted {} {}", RESOURCE, d.id());

    d.set_id("");
    Ok(())
}
