//! Global catalog product models

use std::collections::BTreeMap;

use sell_core::resource::Attributes;
use serde::{Deserialize, Serialize};

use super::catalog::{
    CatalogProductProvider, GlobalCatalogMetadataService, GlobalCatalogMetadataUi,
    GlobalCatalogOverviewUi,
};
use crate::convert::{
    ConvertResult, MapBuilder, MapTo, ToMap, block, blocks, boolean, float, string, string_map,
    strings,
};

/// Catalog product as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogProduct {
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
    pub images: Option<GlobalCatalogProductImages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_provider: Option<CatalogProductProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GlobalCatalogProductMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogProductImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MapTo for GlobalCatalogProductImages {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            image: string(map, "image")?,
        })
    }
}

impl ToMap for GlobalCatalogProductImages {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().string("image", &self.image).build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogProductMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_compatible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<GlobalCatalogMetadataUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<GlobalCatalogMetadataService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<GlobalCatalogProductMetadataOther>,
}

impl MapTo for GlobalCatalogProductMetadata {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            rc_compatible: boolean(map, "rc_compatible")?,
            ui: block(map, "ui")?,
            service: block(map, "service")?,
            other: block(map, "other")?,
        })
    }
}

impl ToMap for GlobalCatalogProductMetadata {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .boolean("rc_compatible", &self.rc_compatible)
            .block("ui", &self.ui)
            .block("service", &self.service)
            .block("other", &self.other)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogProductMetadataOther {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pc: Option<GlobalCatalogProductMetadataOtherPc>,
}

impl MapTo for GlobalCatalogProductMetadataOther {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            pc: block(map, "pc")?,
        })
    }
}

impl ToMap for GlobalCatalogProductMetadataOther {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().block("pc", &self.pc).build()
    }
}

/// Partner Center section of the product metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogProductMetadataOtherPc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<GlobalCatalogProductMetadataOtherPcSupport>,
}

impl MapTo for GlobalCatalogProductMetadataOtherPc {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            support: block(map, "support")?,
        })
    }
}

impl ToMap for GlobalCatalogProductMetadataOtherPc {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().block("support", &self.support).build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogProductMetadataOtherPcSupport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_i18n: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_escalation: Option<SupportEscalation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_details: Option<Vec<SupportDetailsItem>>,
}

impl MapTo for GlobalCatalogProductMetadataOtherPcSupport {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            url: string(map, "url")?,
            status_url: string(map, "status_url")?,
            locations: strings(map, "locations")?,
            languages: strings(map, "languages")?,
            process: string(map, "process")?,
            process_i18n: string_map(map, "process_i18n")?,
            support_type: string(map, "support_type")?,
            support_escalation: block(map, "support_escalation")?,
            support_details: blocks(map, "support_details")?,
        })
    }
}

impl ToMap for GlobalCatalogProductMetadataOtherPcSupport {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("url", &self.url)
            .string("status_url", &self.status_url)
            .strings("locations", &self.locations)
            .strings("languages", &self.languages)
            .string("process", &self.process)
            .string_map("process_i18n", &self.process_i18n)
            .string("support_type", &self.support_type)
            .block("support_escalation", &self.support_escalation)
            .blocks("support_details", &self.support_details)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportEscalation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_wait_time: Option<SupportTimeInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_wait_time: Option<SupportTimeInterval>,
}

impl MapTo for SupportEscalation {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            contact: string(map, "contact")?,
            escalation_wait_time: block(map, "escalation_wait_time")?,
            response_wait_time: block(map, "response_wait_time")?,
        })
    }
}

impl ToMap for SupportEscalation {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("contact", &self.contact)
            .block("escalation_wait_time", &self.escalation_wait_time)
            .block("response_wait_time", &self.response_wait_time)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportTimeInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MapTo for SupportTimeInterval {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            value: float(map, "value")?,
            unit: string(map, "type")?,
        })
    }
}

impl ToMap for SupportTimeInterval {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .float("value", &self.value)
            .string("type", &self.unit)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportDetailsItem {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub support_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_wait_time: Option<SupportTimeInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<SupportDetailsItemAvailability>,
}

impl MapTo for SupportDetailsItem {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            support_type: string(map, "type")?,
            contact: string(map, "contact")?,
            response_wait_time: block(map, "response_wait_time")?,
            availability: block(map, "availability")?,
        })
    }
}

impl ToMap for SupportDetailsItem {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("type", &self.support_type)
            .string("contact", &self.contact)
            .block("response_wait_time", &self.response_wait_time)
            .block("availability", &self.availability)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportDetailsItemAvailability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<SupportDetailsItemAvailabilityTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_available: Option<bool>,
}

impl MapTo for SupportDetailsItemAvailability {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            times: blocks(map, "times")?,
            timezone: string(map, "timezone")?,
            always_available: boolean(map, "always_available")?,
        })
    }
}

impl ToMap for SupportDetailsItemAvailability {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .blocks("times", &self.times)
            .string("timezone", &self.timezone)
            .boolean("always_available", &self.always_available)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportDetailsItemAvailabilityTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl MapTo for SupportDetailsItemAvailabilityTime {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            day: float(map, "day")?,
            start_time: string(map, "start_time")?,
            end_time: string(map, "end_time")?,
        })
    }
}

impl ToMap for SupportDetailsItemAvailabilityTime {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .float("day", &self.day)
            .string("start_time", &self.start_time)
            .string("end_time", &self.end_time)
            .build()
    }
}

/// Changeable fields of a catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_ui: Option<GlobalCatalogOverviewUi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<GlobalCatalogProductImages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_provider: Option<CatalogProductProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GlobalCatalogProductMetadata>,
}

/// Identifies one catalog product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogProductPath {
    pub product_id: String,
    pub catalog_product_id: String,
    pub env: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCatalogProductOptions {
    pub product_id: String,
    pub env: Option<String>,
    pub name: String,
    pub active: bool,
    pub disabled: bool,
    pub kind: String,
    pub tags: Vec<String>,
    pub object_provider: CatalogProductProvider,
    pub object_id: Option<String>,
    pub overview_ui: Option<GlobalCatalogOverviewUi>,
    pub images: Option<GlobalCatalogProductImages>,
    pub metadata: Option<GlobalCatalogProductMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(value: f64, unit: &str) -> SupportTimeInterval {
        SupportTimeInterval {
            value: Some(value),
            unit: Some(unit.to_string()),
        }
    }

    fn pc_support() -> GlobalCatalogProductMetadataOtherPcSupport {
        GlobalCatalogProductMetadataOtherPcSupport {
            url: Some("https://support.example.com".to_string()),
            status_url: Some("https://status.example.com".to_string()),
            locations: Some(vec!["US".to_string(), "DE".to_string()]),
            languages: Some(vec!["en".to_string()]),
            process: Some("Open a ticket".to_string()),
            process_i18n: Some(BTreeMap::from([(
                "de".to_string(),
                "Ticket eröffnen".to_string(),
            )])),
            support_type: Some("community".to_string()),
            support_escalation: Some(SupportEscalation {
                contact: Some("escalation@example.com".to_string()),
                escalation_wait_time: Some(interval(2.0, "hour")),
                response_wait_time: Some(interval(30.0, "minute")),
            }),
            support_details: Some(vec![SupportDetailsItem {
                support_type: Some("support_site".to_string()),
                contact: Some("https://support.example.com/open".to_string()),
                response_wait_time: Some(interval(1.0, "day")),
                availability: Some(SupportDetailsItemAvailability {
                    times: Some(vec![SupportDetailsItemAvailabilityTime {
                        day: Some(1.0),
                        start_time: Some("09:00".to_string()),
                        end_time: Some("17:00".to_string()),
                    }]),
                    timezone: Some("Europe/Berlin".to_string()),
                    always_available: Some(false),
                }),
            }]),
        }
    }

    #[test]
    fn metadata_with_support_tree_round_trips() {
        let metadata = GlobalCatalogProductMetadata {
            rc_compatible: Some(true),
            ui: None,
            service: Some(GlobalCatalogMetadataService {
                rc_provisionable: Some(true),
                iam_compatible: Some(false),
                bindable: Some(true),
                plan_updateable: Some(true),
                service_key_supported: Some(false),
            }),
            other: Some(GlobalCatalogProductMetadataOther {
                pc: Some(GlobalCatalogProductMetadataOtherPc {
                    support: Some(pc_support()),
                }),
            }),
        };
        assert_eq!(
            GlobalCatalogProductMetadata::map_to(&metadata.to_map()).unwrap(),
            metadata
        );
    }
}
