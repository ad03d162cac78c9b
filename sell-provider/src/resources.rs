//! Resource type definitions for Partner Center Sell onboarding
//!
//! Each resource type takes its schema from the matching [`SellSchemaConfig`].
//!
//! [`SellSchemaConfig`]: crate::schemas::SellSchemaConfig

use sell_core::provider::ResourceType;
use sell_core::schema::ResourceSchema;

use crate::handlers;
use crate::schemas::{
    catalog_deployment, catalog_plan, catalog_product, iam_registration, product, registration,
    resource_broker,
};

// =============================================================================
// Resource Type Definitions
// =============================================================================

macro_rules! define_resource_type {
    ($name:ident, $type_name:expr, $config:path) => {
        pub struct $name;
        impl ResourceType for $name {
            fn name(&self) -> &'static str {
                $type_name
            }
            fn schema(&self) -> ResourceSchema {
                $config().schema
            }
        }
    };
}

define_resource_type!(
    ProductType,
    handlers::product::RESOURCE,
    product::onboarding_product_config
);
define_resource_type!(
    CatalogProductType,
    handlers::catalog_product::RESOURCE,
    catalog_product::onboarding_catalog_product_config
);
define_resource_type!(
    CatalogPlanType,
    handlers::catalog_plan::RESOURCE,
    catalog_plan::onboarding_catalog_plan_config
);
define_resource_type!(
    CatalogDeploymentType,
    handlers::catalog_deployment::RESOURCE,
    catalog_deployment::onboarding_catalog_deployment_config
);
define_resource_type!(
    RegistrationType,
    handlers::registration::RESOURCE,
    registration::onboarding_registration_config
);
define_resource_type!(
    ResourceBrokerType,
    handlers::resource_broker::RESOURCE,
    resource_broker::onboarding_resource_broker_config
);
define_resource_type!(
    IamRegistrationType,
    handlers::iam_registration::RESOURCE,
    iam_registration::onboarding_iam_registration_config
);

/// Returns all resource types supported by this provider
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(ProductType),
        Box::new(CatalogProductType),
        Box::new(CatalogPlanType),
        Box::new(CatalogDeploymentType),
        Box::new(RegistrationType),
        Box::new(ResourceBrokerType),
        Box::new(IamRegistrationType),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::configs;

    #[test]
    fn resource_types_follow_schema_configs() {
        let types = resource_types();
        let configs = configs();
        assert_eq!(types.len(), configs.len());
        for (resource_type, config) in types.iter().zip(&configs) {
            assert_eq!(resource_type.name(), config.resource_type_name);
            assert_eq!(resource_type.schema().resource_type, resource_type.name());
        }
    }
}
