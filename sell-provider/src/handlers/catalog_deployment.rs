//! ibm_onboarding_catalog_deployment handlers

use sell_core::ident::join_id_parts;
use sell_core::provider::ProviderResult;
use sell_core::resource::{Attributes, Value};
use sell_core::resource_data::ResourceData;

use super::{Op, apply, forget};
use crate::client::PartnerCenterSellApi;
use crate::convert::MapBuilder;
use crate::models::*;
use crate::schemas::catalog_deployment::onboarding_catalog_deployment_config;

pub const RESOURCE: &str = "ibm_onboarding_catalog_deployment";

const ID_PARTS: [&str; 4] = [
    "product_id",
    "catalog_product_id",
    "catalog_plan_id",
    "catalog_deployment_id",
];

fn path(parts: &[String], d: &ResourceData) -> CatalogDeploymentPath {
    CatalogDeploymentPath {
        product_id: parts[0].clone(),
        catalog_product_id: parts[1].clone(),
        catalog_plan_id: parts[2].clone(),
        catalog_deployment_id: parts[3].clone(),
        env: d.get_string_ok("env"),
    }
}

fn state_attributes(deployment: &GlobalCatalogDeployment) -> Attributes {
    MapBuilder::new()
        .string("object_id", &deployment.object_id)
        .string("name", &deployment.name)
        .boolean("active", &deployment.active)
        .boolean("disabled", &deployment.disabled)
        .string("kind", &deployment.kind)
        .block("overview_ui", &deployment.overview_ui)
        .strings("tags", &deployment.tags)
        .block("object_provider", &deployment.object_provider)
        .block("metadata", &deployment.metadata)
        .strings("geo_tags", &deployment.geo_tags)
        .string("url", &deployment.url)
        .build()
}

pub async fn create(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "create");

    let options = CreateCatalogDeploymentOptions {
        product_id: d.get_string("product_id"),
        catalog_product_id: d.get_string("catalog_product_id"),
        catalog_plan_id: d.get_string("catalog_plan_id"),
        env: d.get_string_ok("env"),
        name: d.get_string("name"),
        active: d.get_bool("active"),
        disabled: d.get_bool("disabled"),
        kind: d.get_string("kind"),
        tags: d.get_string_list("tags"),
        object_provider: op.required_block(d, "object_provider")?,
        object_id: d.get_string_ok("object_id"),
        overview_ui: op.block(d, "overview_ui")?,
        metadata: op.block(d, "metadata")?,
    };

    let response = client
        .create_catalog_deployment(&options)
        .await
        .map_err(|e| op.sdk("create_catalog_deployment", e))?;

    d.set_id(join_id_parts(&[
        options.product_id.as_str(),
        options.catalog_product_id.as_str(),
        options.catalog_plan_id.as_str(),
        op.created_id(response.result.id.as_deref())?.as_str(),
    ]));
    log::info!("Created {} {}", RESOURCE, d.id());

    read(client, d).await
}

pub async fn read(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "read");
    let parts = op.id_parts(d, ID_PARTS.len())?;

    let deployment = match client.get_catalog_deployment(&path(&parts, d)).await {
        Ok(response) => response.result,
        Err(e) if e.is_not_found() => {
            forget(d, op);
            return Ok(());
        }
        Err(e) => return Err(op.sdk("get_catalog_deployment", e)),
    };

    apply(d, state_attributes(&deployment));
    for (name, part) in ID_PARTS.iter().zip(parts) {
        if !part.is_empty() {
            d.set(*name, Value::String(part));
        }
    }
    Ok(())
}

pub async fn update(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "update");
    let config = onboarding_catalog_deployment_config();
    let parts = op.id_parts(d, ID_PARTS.len())?;
    op.check_force_new(d, &config)?;

    let mut patch = GlobalCatalogDeploymentPatch::default();
    let mut has_change = false;

    if d.has_change("active") {
        patch.active = Some(d.get_bool("active"));
        has_change = true;
    }
    if d.has_change("disabled") {
        patch.disabled = Some(d.get_bool("disabled"));
        has_change = true;
    }
    if d.has_change("overview_ui") {
        patch.overview_ui = op.block(d, "overview_ui")?;
        has_change = true;
    }
    if d.has_change("tags") {
        patch.tags = Some(d.get_string_list("tags"));
        has_change = true;
    }
    if d.has_change("object_provider") {
        patch.object_provider = op.block(d, "object_provider")?;
        has_change = true;
    }
    if d.has_change("metadata") {
        patch.metadata = op.block(d, "metadata")?;
        has_change = true;
    }

    if has_change {
        let body = op.patch(&patch, &config, d)?;
        client
            .update_catalog_deployment(&path(&parts, d), body)
            .await
            .map_err(|e| op.sdk("update_catalog_deployment", e))?;
        log::info!("Updated {} {}", RESOURCE, d.id());
    }

    read(client, d).await
}

pub async fn delete(client: &dyn PartnerCenterSellApi, d: &mut ResourceData) -> ProviderResult<()> {
    let op = Op::new(RESOURCE, "delete");
    let parts = op.id_parts(d, ID_PARTS.len())?;

    client
        .delete_catalog_deployment(&path(&parts, d))
        .await
        .map_err(|e| op.sdk("delete_catalog_deployment", e))?;
    log::info!("Deleted {} {}", RESOURCE, d.id());

    d.set_id("");
    Ok(())
}
