//! ibm_onboarding_resource_broker handlers

use sell_core::provider::ProviderResult;
use sell_core::resource::{Attributes, Value};
use sell_core::resource_data::ResourceData;

use super::{Op, apply, forget};
use crate::client::PartnerCenterSellApi;
use crate::convert::MapBuilder;
use crate::models::*;
use crate::schemas::resource_broker::onboarding_resource_broker_config;

pub const RESOURCE: &str = "ibm_onboarding_resource_broker";

fn path(d: &ResourceData) -> BrokerPath {
    BrokerPath {
        broker_id: d.id().to_string(),
        env: d.get_string_ok("env"),
    }
}

fn state_attributes(broker: &Broker) -> Attributes {
    MapBuilder::new()
        .string("auth_username", &broker.auth_username)
        .string("auth_password", &broker.auth_password)
        .string("auth_scheme", &broker.auth_scheme)
        .string("resource_group_crn", &broker.resource_group_crn)
        .string("state", &broker.state)
        .string("broker_url", &broker.broker_url)
        .boolean("allow_context_updates", &broker.allow_context_updates)
        .string("catalog_type", &broker.catalog_type)
        .string("type", &broker.broker_type)
        .string("name", &broker.name)
        .string("region", &broker.region)
        .string("account_id", &broker.account_id)
        .string("crn", &broker.crn)
        .string("guid", &broker.guid)
        .string("created_at", &broker.created_at)
        .string("updated_at", &broker.updated_at)
        .block("created_by", &broker.created_by)
        .block("updated_by", &broker.updated_by)
        .build()
}

pub async fn create(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "create");

    let options = CreateResourceBrokerOptions {
        env: d.get_string_ok("env"),
        auth_scheme: d.get_string("auth_scheme"),
        name: d.get_string("name"),
        broker_url: d.get_string("broker_url"),
        broker_type: d.get_string("type"),
        auth_username: d.get_string_ok("auth_username"),
        auth_password: d.get_string_ok("auth_password"),
        resource_group_crn: d.get_string_ok("resource_group_crn"),
        state: d.get_string_ok("state"),
        allow_context_updates: d.get_ok("allow_context_updates").and_then(Value::as_bool),
        catalog_type: d.get_string_ok("catalog_type"),
        region: d.get_string_ok("region"),
    };

    let response = client
        .create_resource_broker(&options)
        .await
        .map_err(|e| op.sdk("create_resource_broker", e))?;

    d.set_id(op.created_id(response.result.id.as_deref())?);
    log::info!("Created {} {}", RESOURCE, d.id());

    read(client, d).await
}

pub async fn read(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "read");

    let broker = match client.get_resource_broker(&path(d)).await {
        Ok(response) => response.result,
        Err(e) if e.is_not_found() => {
            forget(d, op);
            return Ok(());
        }
        Err(e) => return Err(op.sdk("get_resource_broker", e)),
    };

    apply(d, state_attributes(&broker));
    Ok(())
}

pub async fn update(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "update");
    let config = onboarding_resource_broker_config();
    op.check_force_new(d, &config)?;

    let mut patch = BrokerPatch::default();
    let mut has_change = false;

    for (field, slot) in [
        ("auth_username", &mut patch.auth_username),
        ("auth_password", &mut patch.auth_password),
        ("auth_scheme", &mut patch.auth_scheme),
        ("resource_group_crn", &mut patch.resource_group_crn),
        ("state", &mut patch.state),
        ("broker_url", &mut patch.broker_url),
        ("catalog_type", &mut patch.catalog_type),
        ("region", &mut patch.region),
    ] {
        if d.has_change(field) {
            *slot = d.get_string_ok(field);
            has_change = true;
        }
    }
    if d.has_change("allow_context_updates") {
        patch.allow_context_updates = Some(d.get_bool("allow_context_updates"));
        has_change = true;
    }

    if has_change {
        let body = op.patch(&patch, &config, d)?;
        client
            .update_resource_broker(&path(d), body)
            .await
            .map_err(|e| op.sdk("update_resource_broker", e))?;
        log::info!("Updated {} {}", RESOURCE, d.id());
    }

    read(client, d).await
}

pub async fn delete(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "delete");

    client
        .delete_resource_broker(&path(d))
        .await
        .map_err(|e| op.sdk("delete_resource_broker", e))?;
    log::info!("Deleted {} {}", RESOURCE, d.id());

    d.set_id("");
    Ok(())
}
