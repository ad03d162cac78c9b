//! Global catalog plan models

use sell_core::resource::Attributes;
use serde::{Deserialize, Serialize};

use super::catalog::{
    CatalogProductProvider, GlobalCatalogMetadataService, GlobalCatalogMetadataUi,
    GlobalCatalogOverviewUi,
};
use crate::convert::{ConvertResult, MapBuilder, MapTo, ToMap, block, boolean, string};

/// Catalog plan as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_ui: Option<GlobalCatalogOverviewUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_provider: Option<CatalogProductProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GlobalCatalogPlanMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogPlanMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_compatible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<GlobalCatalogMetadataUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<GlobalCatalogMetadataService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<GlobalCatalogMetadataPricing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<GlobalCatalogPlanMetadataPlan>,
}

impl MapTo for GlobalCatalogPlanMetadata {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            rc_compatible: boolean(map, "rc_compatible")?,
            ui: block(map, "ui")?,
            service: block(map, "service")?,
            pricing: block(map, "pricing")?,
            plan: block(map, "plan")?,
        })
    }
}

impl ToMap for GlobalCatalogPlanMetadata {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .boolean("rc_compatible", &self.rc_compatible)
            .block("ui", &self.ui)
            .block("service", &self.service)
            .block("pricing", &self.pricing)
            .block("plan", &self.plan)
            .build()
    }
}

/// How a plan is priced and where the price comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataPricing {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl MapTo for GlobalCatalogMetadataPricing {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            pricing_type: string(map, "type")?,
            origin: string(map, "origin")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataPricing {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("type", &self.pricing_type)
            .string("origin", &self.origin)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogPlanMetadataPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_internal_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
}

impl MapTo for GlobalCatalogPlanMetadataPlan {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            allow_internal_users: boolean(map, "allow_internal_users")?,
            bindable: boolean(map, "bindable")?,
        })
    }
}

impl ToMap for GlobalCatalogPlanMetadataPlan {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .boolean("allow_internal_users", &self.allow_internal_users)
            .boolean("bindable", &self.bindable)
            .build()
    }
}

/// Changeable fields of a catalog plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogPlanPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_ui: Option<GlobalCatalogOverviewUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_provider: Option<CatalogProductProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GlobalCatalogPlanMetadata>,
}

/// Identifies one catalog plan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPlanPath {
    pub product_id: String,
    pub catalog_product_id: String,
    pub catalog_plan_id: String,
    pub env: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCatalogPlanOptions {
    pub product_id: String,
    pub catalog_product_id: String,
    pub env: Option<String>,
    pub name: String,
    pub active: bool,
    pub disabled: bool,
    pub kind: String,
    pub tags: Vec<String>,
    pub object_provider: CatalogProductProvider,
    pub object_id: Option<String>,
    pub overview_ui: Option<GlobalCatalogOverviewUi>,
    pub metadata: Option<GlobalCatalogPlanMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_metadata_round_trips() {
        let metadata = GlobalCatalogPlanMetadata {
            rc_compatible: Some(false),
            ui: None,
            service: None,
            pricing: Some(GlobalCatalogMetadataPricing {
                pricing_type: Some("paid".to_string()),
                origin: Some("pricing_catalog".to_string()),
            }),
            plan: Some(GlobalCatalogPlanMetadataPlan {
                allow_internal_users: Some(true),
                bindable: Some(false),
            }),
        };
        assert_eq!(
            GlobalCatalogPlanMetadata::map_to(&metadata.to_map()).unwrap(),
            metadata
        );
    }

    #[test]
    fn pricing_type_serializes_as_type() {
        let pricing = GlobalCatalogMetadataPricing {
            pricing_type: Some("free".to_string()),
            origin: None,
        };
        assert_eq!(
            serde_json::to_value(&pricing).unwrap(),
            serde_json::json!({"type": "free"})
        );
    }
}
