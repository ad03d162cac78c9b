//! CRUD handlers for the onboarding resources
//!
//! Every resource module exposes `create`, `read`, `update` and `delete`
//! working on a [`ResourceData`]. Create and update finish by reading the
//! resource back; read clears the ID when the service answers 404.

pub mod catalog_deployment;
pub mod catalog_plan;
pub mod catalog_product;
pub mod iam_registration;
pub mod product;
pub mod registration;
pub mod resource_broker;

use std::sync::Arc;

use heck::ToUpperCamelCase;
use sell_core::ident::{ID_SEPARATOR, sep_id_parts_exact};
use sell_core::patch::patch_as_map;
use sell_core::provider::{ProviderError, ProviderResult};
use sell_core::resource::Attributes;
use sell_core::resource_data::ResourceData;
use serde::Serialize;

use crate::client::{ClientSession, PartnerCenterSellApi, PatchBody, SdkError};
use crate::convert::{self, ConvertError, MapTo};
use crate::schemas::SellSchemaConfig;

/// One CRUD operation on one resource type, used to label errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Op {
    pub resource: &'static str,
    pub operation: &'static str,
}

impl Op {
    pub fn new(resource: &'static str, operation: &'static str) -> Self {
        Self {
            resource,
            operation,
        }
    }

    /// Error at a named step; its debug message is logged before returning
    pub fn fail(&self, message: impl Into<String>, step: &str) -> ProviderError {
        let err = ProviderError::discriminated(message, self.resource, self.operation, step);
        log::debug!("{}", err.debug_message());
        err
    }

    /// Error returned by an SDK call such as `update_catalog_plan`
    pub fn sdk(&self, call: &str, err: SdkError) -> ProviderError {
        let message = format!("{}WithContext failed: {}", call.to_upper_camel_case(), err);
        let err = ProviderError::new(message)
            .with_context(self.resource, self.operation, None)
            .with_cause(err);
        log::debug!("{}", err.debug_message());
        err
    }

    fn parse(&self, key: &str, err: ConvertError) -> ProviderError {
        self.fail(err.to_string(), &format!("parse-{}", key))
    }

    /// Optional single block at `key` of the planned configuration
    pub fn block<T: MapTo>(&self, d: &ResourceData, key: &str) -> ProviderResult<Option<T>> {
        convert::block(d.attributes(), key).map_err(|e| self.parse(key, e))
    }

    /// Required single block at `key` of the planned configuration
    pub fn required_block<T: MapTo>(&self, d: &ResourceData, key: &str) -> ProviderResult<T> {
        convert::required_block(d.attributes(), key).map_err(|e| self.parse(key, e))
    }

    /// Block list at `key` of the planned configuration
    pub fn blocks<T: MapTo>(&self, d: &ResourceData, key: &str) -> ProviderResult<Option<Vec<T>>> {
        convert::blocks(d.attributes(), key).map_err(|e| self.parse(key, e))
    }

    /// ID assigned by the service in a create response
    pub fn created_id(&self, id: Option<&str>) -> ProviderResult<String> {
        match id {
            Some(id) if !id.is_empty() => Ok(id.to_string()),
            _ => Err(self.fail("create response carries no ID", "create")),
        }
    }

    /// Split the resource ID into exactly `count` parts
    pub fn id_parts(&self, d: &ResourceData, count: usize) -> ProviderResult<Vec<String>> {
        sep_id_parts_exact(d.id(), ID_SEPARATOR, count)
            .map_err(|e| self.fail(e.to_string(), "sep-id-parts"))
    }

    /// Merge-patch body for a serialized patch struct
    pub fn patch<P: Serialize>(
        &self,
        patch: &P,
        config: &SellSchemaConfig,
        d: &ResourceData,
    ) -> ProviderResult<PatchBody> {
        let value = serde_json::to_value(patch).map_err(|e| self.fail(e.to_string(), "as-patch"))?;
        Ok(patch_as_map(
            value,
            &config.schema.attributes,
            config.patch_fields,
            d,
        ))
    }

    /// Reject a change to any ForceNew attribute
    pub fn check_force_new(&self, d: &ResourceData, config: &SellSchemaConfig) -> ProviderResult<()> {
        for name in config.schema.force_new_attributes() {
            if d.has_change(name) {
                return Err(self.fail(
                    format!(
                        "Cannot update resource property \"{}\" with the ForceNew annotation. \
                         The resource must be re-created to update this property.",
                        name
                    ),
                    &format!("{}-forces-new", name),
                ));
            }
        }
        Ok(())
    }
}

/// Obtain the Partner Center Sell client for `op`
pub fn client(
    session: &dyn ClientSession,
    op: Op,
) -> ProviderResult<Arc<dyn PartnerCenterSellApi>> {
    session.partner_center_sell_v1().map_err(|e| {
        let err = ProviderError::discriminated(
            e.to_string(),
            op.resource,
            op.operation,
            "initialize-client",
        )
        .with_cause(e);
        log::debug!("{}", err.debug_message());
        err
    })
}

/// Copy every attribute of `attrs` into the resource data
pub fn apply(d: &mut ResourceData, attrs: Attributes) {
    for (key, value) in attrs {
        d.set(key, value);
    }
}

/// Resource gone on the service side; stop tracking it
pub fn forget(d: &mut ResourceData, op: Op) {
    log::info!(
        "{} {} not found, removing it from state",
        op.resource,
        d.id()
    );
    d.set_id("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::catalog_plan::onboarding_catalog_plan_config;
    use sell_core::resource::Value;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    #[test]
    fn sdk_errors_name_the_call() {
        let op = Op::new("ibm_onboarding_catalog_plan", "update");
        let err = op.sdk("update_catalog_plan", SdkError::with_status(400, "bad request"));
        assert_eq!(err.message, "UpdateCatalogPlanWithContext failed: bad request");
        assert_eq!(err.step(), None);
    }

    #[test]
    fn id_parts_reports_step() {
        let op = Op::new("ibm_onboarding_catalog_plan", "read");
        let d = ResourceData::existing("only/two", Attributes::new());
        let err = op.id_parts(&d, 3).unwrap_err();
        assert_eq!(err.step(), Some("sep-id-parts"));
    }

    #[test]
    fn force_new_change_is_rejected() {
        let op = Op::new("ibm_onboarding_catalog_plan", "update");
        let mut prior = Attributes::new();
        prior.insert("catalog_product_id".to_string(), s("old"));
        let mut planned = Attributes::new();
        planned.insert("catalog_product_id".to_string(), s("new"));
        let d = ResourceData::with_prior("p/old/plan", prior, planned);

        let err = op
            .check_force_new(&d, &onboarding_catalog_plan_config())
            .unwrap_err();
        assert_eq!(
            err.message,
            "Cannot update resource property \"catalog_product_id\" with the ForceNew annotation. \
             The resource must be re-created to update this property."
        );
        assert_eq!(err.step(), Some("catalog_product_id-forces-new"));
    }

    #[test]
    fn created_id_must_be_present() {
        let op = Op::new("ibm_onboarding_product", "create");
        assert_eq!(op.created_id(Some("p-1")).unwrap(), "p-1");
        for missing in [None, Some("")] {
            let err = op.created_id(missing).unwrap_err();
            assert_eq!(err.step(), Some("create"));
            assert_eq!(err.message, "create response carries no ID");
        }
    }

    #[test]
    fn parse_failures_name_the_field() {
        let op = Op::new("ibm_onboarding_catalog_plan", "create");
        let mut planned = Attributes::new();
        planned.insert("object_provider".to_string(), s("not a block"));
        let d = ResourceData::new(planned);
        let err = op
            .block::<crate::models::CatalogProductProvider>(&d, "object_provider")
            .unwrap_err();
        assert_eq!(err.step(), Some("parse-object_provider"));
    }
}
