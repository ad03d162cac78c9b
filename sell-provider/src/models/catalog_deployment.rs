//! Global catalog deployment models

use serde_json::{Map, Value as JsonValue};

use sell_core::resource::Attributes;
use serde::{Deserialize, Serialize};

use super::catalog::{CatalogProductProvider, GlobalCatalogMetadataUi, GlobalCatalogOverviewUi};
use crate::convert::{
    ConvertResult, MapBuilder, MapTo, ToMap, block, blocks, boolean, json_map, string, strings,
};

/// Catalog deployment as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogDeployment {
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
    pub metadata: Option<GlobalCatalogDeploymentMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogDeploymentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_compatible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<GlobalCatalogMetadataUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<GlobalCatalogDeploymentMetadataService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<GlobalCatalogMetadataDeployment>,
}

impl MapTo for GlobalCatalogDeploymentMetadata {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            rc_compatible: boolean(map, "rc_compatible")?,
            ui: block(map, "ui")?,
            service: block(map, "service")?,
            deployment: block(map, "deployment")?,
        })
    }
}

impl ToMap for GlobalCatalogDeploymentMetadata {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .boolean("rc_compatible", &self.rc_compatible)
            .block("ui", &self.ui)
            .block("service", &self.service)
            .block("deployment", &self.deployment)
            .build()
    }
}

/// Service flags plus the custom parameters shown at provisioning time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogDeploymentMetadataService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_provisionable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_compatible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_updateable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_key_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<GlobalCatalogMetadataServiceCustomParameters>>,
}

impl MapTo for GlobalCatalogDeploymentMetadataService {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            rc_provisionable: boolean(map, "rc_provisionable")?,
            iam_compatible: boolean(map, "iam_compatible")?,
            bindable: boolean(map, "bindable")?,
            plan_updateable: boolean(map, "plan_updateable")?,
            service_key_supported: boolean(map, "service_key_supported")?,
            parameters: blocks(map, "parameters")?,
        })
    }
}

impl ToMap for GlobalCatalogDeploymentMetadataService {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .boolean("rc_provisionable", &self.rc_provisionable)
            .boolean("iam_compatible", &self.iam_compatible)
            .boolean("bindable", &self.bindable)
            .boolean("plan_updateable", &self.plan_updateable)
            .boolean("service_key_supported", &self.service_key_supported)
            .blocks("parameters", &self.parameters)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataServiceCustomParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<GlobalCatalogMetadataServiceCustomParametersOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<Map<String, JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalidmessage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<GlobalCatalogMetadataServiceCustomParametersI18n>,
}

impl MapTo for GlobalCatalogMetadataServiceCustomParameters {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            displayname: string(map, "displayname")?,
            name: string(map, "name")?,
            parameter_type: string(map, "type")?,
            options: blocks(map, "options")?,
            value: strings(map, "value")?,
            layout: string(map, "layout")?,
            associations: json_map(map, "associations")?,
            validation_url: string(map, "validation_url")?,
            options_url: string(map, "options_url")?,
            invalidmessage: string(map, "invalidmessage")?,
            description: string(map, "description")?,
            required: boolean(map, "required")?,
            pattern: string(map, "pattern")?,
            placeholder: string(map, "placeholder")?,
            readonly: boolean(map, "readonly")?,
            hidden: boolean(map, "hidden")?,
            i18n: block(map, "i18n")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataServiceCustomParameters {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("displayname", &self.displayname)
            .string("name", &self.name)
            .string("type", &self.parameter_type)
            .blocks("options", &self.options)
            .strings("value", &self.value)
            .string("layout", &self.layout)
            .json_map("associations", &self.associations)
            .string("validation_url", &self.validation_url)
            .string("options_url", &self.options_url)
            .string("invalidmessage", &self.invalidmessage)
            .string("description", &self.description)
            .boolean("required", &self.required)
            .string("pattern", &self.pattern)
            .string("placeholder", &self.placeholder)
            .boolean("readonly", &self.readonly)
            .boolean("hidden", &self.hidden)
            .block("i18n", &self.i18n)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataServiceCustomParametersOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<GlobalCatalogMetadataServiceCustomParametersI18n>,
}

impl MapTo for GlobalCatalogMetadataServiceCustomParametersOptions {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            displayname: string(map, "displayname")?,
            value: string(map, "value")?,
            i18n: block(map, "i18n")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataServiceCustomParametersOptions {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("displayname", &self.displayname)
            .string("value", &self.value)
            .block("i18n", &self.i18n)
            .build()
    }
}

localized_blocks!(
    /// Translations of a custom parameter or option
    GlobalCatalogMetadataServiceCustomParametersI18n,
    GlobalCatalogMetadataServiceCustomParametersI18nFields
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataServiceCustomParametersI18nFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MapTo for GlobalCatalogMetadataServiceCustomParametersI18nFields {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            displayname: string(map, "displayname")?,
            description: string(map, "description")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataServiceCustomParametersI18nFields {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("displayname", &self.displayname)
            .string("description", &self.description)
            .build()
    }
}

/// Where and through which broker a deployment is provisioned
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataDeployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<GlobalCatalogMetadataDeploymentBroker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_crn: Option<String>,
}

impl MapTo for GlobalCatalogMetadataDeployment {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            broker: block(map, "broker")?,
            location: string(map, "location")?,
            location_url: string(map, "location_url")?,
            target_crn: string(map, "target_crn")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataDeployment {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .block("broker", &self.broker)
            .string("location", &self.location)
            .string("location_url", &self.location_url)
            .string("target_crn", &self.target_crn)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataDeploymentBroker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

impl MapTo for GlobalCatalogMetadataDeploymentBroker {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            name: string(map, "name")?,
            guid: string(map, "guid")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataDeploymentBroker {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("name", &self.name)
            .string("guid", &self.guid)
            .build()
    }
}

/// Changeable fields of a catalog deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogDeploymentPatch {
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
    pub metadata: Option<GlobalCatalogDeploymentMetadata>,
}

/// Identifies one catalog deployment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogDeploymentPath {
    pub product_id: String,
    pub catalog_product_id: String,
    pub catalog_plan_id: String,
    pub catalog_deployment_id: String,
    pub env: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCatalogDeploymentOptions {
    pub product_id: String,
    pub catalog_product_id: String,
    pub catalog_plan_id: String,
    pub env: Option<String>,
    pub name: String,
    pub active: bool,
    pub disabled: bool,
    pub kind: String,
    pub tags: Vec<String>,
    pub object_provider: CatalogProductProvider,
    pub object_id: Option<String>,
    pub overview_ui: Option<GlobalCatalogOverviewUi>,
    pub metadata: Option<GlobalCatalogDeploymentMetadata>,
}
