//! Presentation models shared by catalog products, plans and deployments

use std::collections::BTreeMap;

use sell_core::resource::Attributes;
use serde::{Deserialize, Serialize};

use crate::convert::{
    ConvertResult, MapBuilder, MapTo, ToMap, block, blocks, boolean, float, required_string,
    string, string_map,
};

/// Provider contact of a catalog object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogProductProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl MapTo for CatalogProductProvider {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            name: string(map, "name")?,
            email: string(map, "email")?,
        })
    }
}

impl ToMap for CatalogProductProvider {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("name", &self.name)
            .string("email", &self.email)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogOverviewUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<GlobalCatalogOverviewUiTranslatedContent>,
}

impl MapTo for GlobalCatalogOverviewUi {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            en: block(map, "en")?,
        })
    }
}

impl ToMap for GlobalCatalogOverviewUi {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().block("en", &self.en).build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogOverviewUiTranslatedContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

impl MapTo for GlobalCatalogOverviewUiTranslatedContent {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            display_name: string(map, "display_name")?,
            description: string(map, "description")?,
            long_description: string(map, "long_description")?,
        })
    }
}

impl ToMap for GlobalCatalogOverviewUiTranslatedContent {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("display_name", &self.display_name)
            .string("description", &self.description)
            .string("long_description", &self.long_description)
            .build()
    }
}

// =============================================================================
// Metadata UI
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataUi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<GlobalCatalogMetadataUiStrings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<GlobalCatalogMetadataUiUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_by_side_index: Option<f64>,
}

impl MapTo for GlobalCatalogMetadataUi {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            strings: block(map, "strings")?,
            urls: block(map, "urls")?,
            hidden: boolean(map, "hidden")?,
            side_by_side_index: float(map, "side_by_side_index")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataUi {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .block("strings", &self.strings)
            .block("urls", &self.urls)
            .boolean("hidden", &self.hidden)
            .float("side_by_side_index", &self.side_by_side_index)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataUiStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<GlobalCatalogMetadataUiStringsContent>,
}

impl MapTo for GlobalCatalogMetadataUiStrings {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            en: block(map, "en")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataUiStrings {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().block("en", &self.en).build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataUiStringsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<CatalogHighlightItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<CatalogProductMediaItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddable_dashboard: Option<String>,
}

impl MapTo for GlobalCatalogMetadataUiStringsContent {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            bullets: blocks(map, "bullets")?,
            media: blocks(map, "media")?,
            embeddable_dashboard: string(map, "embeddable_dashboard")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataUiStringsContent {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .blocks("bullets", &self.bullets)
            .blocks("media", &self.media)
            .string("embeddable_dashboard", &self.embeddable_dashboard)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogHighlightItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_i18n: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_i18n: Option<BTreeMap<String, String>>,
}

impl MapTo for CatalogHighlightItem {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            description: string(map, "description")?,
            description_i18n: string_map(map, "description_i18n")?,
            title: string(map, "title")?,
            title_i18n: string_map(map, "title_i18n")?,
        })
    }
}

impl ToMap for CatalogHighlightItem {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("description", &self.description)
            .string_map("description_i18n", &self.description_i18n)
            .string("title", &self.title)
            .string_map("title_i18n", &self.title_i18n)
            .build()
    }
}

/// Image or video shown on the catalog page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogProductMediaItem {
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_i18n: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
}

impl MapTo for CatalogProductMediaItem {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            caption: required_string(map, "caption")?,
            caption_i18n: string_map(map, "caption_i18n")?,
            thumbnail: string(map, "thumbnail")?,
            media_type: required_string(map, "type")?,
            url: required_string(map, "url")?,
        })
    }
}

impl ToMap for CatalogProductMediaItem {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .required_string("caption", &self.caption)
            .string_map("caption_i18n", &self.caption_i18n)
            .string("thumbnail", &self.thumbnail)
            .required_string("type", &self.media_type)
            .required_string("url", &self.url)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataUiUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apidocs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_details_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_create_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
}

impl MapTo for GlobalCatalogMetadataUiUrls {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            doc_url: string(map, "doc_url")?,
            apidocs_url: string(map, "apidocs_url")?,
            terms_url: string(map, "terms_url")?,
            instructions_url: string(map, "instructions_url")?,
            catalog_details_url: string(map, "catalog_details_url")?,
            custom_create_page_url: string(map, "custom_create_page_url")?,
            dashboard: string(map, "dashboard")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataUiUrls {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("doc_url", &self.doc_url)
            .string("apidocs_url", &self.apidocs_url)
            .string("terms_url", &self.terms_url)
            .string("instructions_url", &self.instructions_url)
            .string("catalog_details_url", &self.catalog_details_url)
            .string("custom_create_page_url", &self.custom_create_page_url)
            .string("dashboard", &self.dashboard)
            .build()
    }
}

/// Service flags of a catalog product or plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCatalogMetadataService {
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
}

impl MapTo for GlobalCatalogMetadataService {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            rc_provisionable: boolean(map, "rc_provisionable")?,
            iam_compatible: boolean(map, "iam_compatible")?,
            bindable: boolean(map, "bindable")?,
            plan_updateable: boolean(map, "plan_updateable")?,
            service_key_supported: boolean(map, "service_key_supported")?,
        })
    }
}

impl ToMap for GlobalCatalogMetadataService {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .boolean("rc_provisionable", &self.rc_provisionable)
            .boolean("iam_compatible", &self.iam_compatible)
            .boolean("bindable", &self.bindable)
            .boolean("plan_updateable", &self.plan_updateable)
            .boolean("service_key_supported", &self.service_key_supported)
            .build()
    }
}
