//! IAM service registration models

use std::collections::BTreeMap;

use sell_core::resource::Attributes;
use serde::{Deserialize, Serialize};

use crate::convert::{
    ConvertResult, MapBuilder, MapTo, ToMap, block, blocks, boolean, required_string, string,
    string_map, strings,
};

localized_strings!(
    /// Translated description text
    IamServiceRegistrationDescriptionObject
);

localized_strings!(
    /// Translated display name
    IamServiceRegistrationDisplayNameObject
);

/// IAM registration as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<IamServiceRegistrationAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_policy_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<IamServiceRegistrationDisplayNameObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_hierarchy_attribute: Option<IamServiceRegistrationResourceHierarchyAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_anonymous_accesses: Option<Vec<IamServiceRegistrationSupportedAnonymousAccess>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_attributes: Option<Vec<IamServiceRegistrationSupportedAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_authorization_subjects:
        Option<Vec<IamServiceRegistrationSupportedAuthorizationSubject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_roles: Option<Vec<IamServiceRegistrationSupportedRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_network: Option<IamServiceRegistrationSupportedNetwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<IamServiceRegistrationDescriptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<IamServiceRegistrationDisplayNameObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<IamServiceRegistrationActionOptions>,
}

impl MapTo for IamServiceRegistrationAction {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            id: string(map, "id")?,
            roles: strings(map, "roles")?,
            description: block(map, "description")?,
            display_name: block(map, "display_name")?,
            options: block(map, "options")?,
        })
    }
}

impl ToMap for IamServiceRegistrationAction {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("id", &self.id)
            .strings("roles", &self.roles)
            .block("description", &self.description)
            .block("display_name", &self.display_name)
            .block("options", &self.options)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationActionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl MapTo for IamServiceRegistrationActionOptions {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            hidden: boolean(map, "hidden")?,
        })
    }
}

impl ToMap for IamServiceRegistrationActionOptions {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().boolean("hidden", &self.hidden).build()
    }
}

/// Key and value of a composite service's place in the resource hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationResourceHierarchyAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MapTo for IamServiceRegistrationResourceHierarchyAttribute {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            key: string(map, "key")?,
            value: string(map, "value")?,
        })
    }
}

impl ToMap for IamServiceRegistrationResourceHierarchyAttribute {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("key", &self.key)
            .string("value", &self.value)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationSupportedAnonymousAccess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IamServiceRegistrationSupportedAnonymousAccessAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl MapTo for IamServiceRegistrationSupportedAnonymousAccess {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            attributes: block(map, "attributes")?,
            roles: strings(map, "roles")?,
        })
    }
}

impl ToMap for IamServiceRegistrationSupportedAnonymousAccess {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .block("attributes", &self.attributes)
            .strings("roles", &self.roles)
            .build()
    }
}

/// Anonymous access attributes
///
/// Additional properties travel as top-level keys of the object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationSupportedAnonymousAccessAttributes {
    pub account_id: String,
    pub service_name: String,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, String>,
}

impl MapTo for IamServiceRegistrationSupportedAnonymousAccessAttributes {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            account_id: required_string(map, "account_id")?,
            service_name: required_string(map, "service_name")?,
            additional_properties: string_map(map, "additional_properties")?.unwrap_or_default(),
        })
    }
}

impl ToMap for IamServiceRegistrationSupportedAnonymousAccessAttributes {
    fn to_map(&self) -> Attributes {
        let additional = Some(self.additional_properties.clone()).filter(|m| !m.is_empty());
        MapBuilder::new()
            .required_string("account_id", &self.account_id)
            .required_string("service_name", &self.service_name)
            .string_map("additional_properties", &additional)
            .build()
    }
}

/// Attribute a policy may be scoped by
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationSupportedAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SupportedAttributesOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<IamServiceRegistrationDisplayNameObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<IamServiceRegistrationDescriptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<SupportedAttributeUi>,
}

impl MapTo for IamServiceRegistrationSupportedAttribute {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            key: string(map, "key")?,
            options: block(map, "options")?,
            display_name: block(map, "display_name")?,
            description: block(map, "description")?,
            ui: block(map, "ui")?,
        })
    }
}

impl ToMap for IamServiceRegistrationSupportedAttribute {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("key", &self.key)
            .block("options", &self.options)
            .block("display_name", &self.display_name)
            .block("description", &self.description)
            .block("ui", &self.ui)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operators: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty_value_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_string_exists_false_value_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_hierarchy: Option<SupportedAttributesOptionsResourceHierarchy>,
}

impl MapTo for SupportedAttributesOptions {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            operators: strings(map, "operators")?,
            hidden: boolean(map, "hidden")?,
            supported_patterns: strings(map, "supported_patterns")?,
            policy_types: strings(map, "policy_types")?,
            is_empty_value_supported: boolean(map, "is_empty_value_supported")?,
            is_string_exists_false_value_supported: boolean(
                map,
                "is_string_exists_false_value_supported",
            )?,
            key: string(map, "key")?,
            resource_hierarchy: block(map, "resource_hierarchy")?,
        })
    }
}

impl ToMap for SupportedAttributesOptions {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .strings("operators", &self.operators)
            .boolean("hidden", &self.hidden)
            .strings("supported_patterns", &self.supported_patterns)
            .strings("policy_types", &self.policy_types)
            .boolean("is_empty_value_supported", &self.is_empty_value_supported)
            .boolean(
                "is_string_exists_false_value_supported",
                &self.is_string_exists_false_value_supported,
            )
            .string("key", &self.key)
            .block("resource_hierarchy", &self.resource_hierarchy)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributesOptionsResourceHierarchy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<SupportedAttributesOptionsResourceHierarchyKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SupportedAttributesOptionsResourceHierarchyValue>,
}

impl MapTo for SupportedAttributesOptionsResourceHierarchy {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            key: block(map, "key")?,
            value: block(map, "value")?,
        })
    }
}

impl ToMap for SupportedAttributesOptionsResourceHierarchy {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .block("key", &self.key)
            .block("value", &self.value)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributesOptionsResourceHierarchyKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MapTo for SupportedAttributesOptionsResourceHierarchyKey {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            key: string(map, "key")?,
            value: string(map, "value")?,
        })
    }
}

impl ToMap for SupportedAttributesOptionsResourceHierarchyKey {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("key", &self.key)
            .string("value", &self.value)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributesOptionsResourceHierarchyValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl MapTo for SupportedAttributesOptionsResourceHierarchyValue {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            key: string(map, "key")?,
        })
    }
}

impl ToMap for SupportedAttributesOptionsResourceHierarchyValue {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().string("key", &self.key).build()
    }
}

/// How the console collects a value for a supported attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributeUi {
    pub input_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_details: Option<SupportedAttributeUiInputDetails>,
}

impl MapTo for SupportedAttributeUi {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            input_type: required_string(map, "input_type")?,
            input_details: block(map, "input_details")?,
        })
    }
}

impl ToMap for SupportedAttributeUi {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .required_string("input_type", &self.input_type)
            .block("input_details", &self.input_details)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributeUiInputDetails {
    #[serde(rename = "type")]
    pub input_details_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<SupportedAttributeUiInputValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<SupportedAttributeUiInputGst>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<SupportedAttributeUiInputUrl>,
}

impl MapTo for SupportedAttributeUiInputDetails {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            input_details_type: required_string(map, "type")?,
            values: blocks(map, "values")?,
            gst: block(map, "gst")?,
            url: block(map, "url")?,
        })
    }
}

impl ToMap for SupportedAttributeUiInputDetails {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .required_string("type", &self.input_details_type)
            .blocks("values", &self.values)
            .block("gst", &self.gst)
            .block("url", &self.url)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributeUiInputValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<IamServiceRegistrationDisplayNameObject>,
}

impl MapTo for SupportedAttributeUiInputValue {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            value: string(map, "value")?,
            display_name: block(map, "display_name")?,
        })
    }
}

impl ToMap for SupportedAttributeUiInputValue {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("value", &self.value)
            .block("display_name", &self.display_name)
            .build()
    }
}

/// Global search query that lists the selectable values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributeUiInputGst {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_option_label: Option<String>,
}

impl MapTo for SupportedAttributeUiInputGst {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            query: string(map, "query")?,
            value_property_name: string(map, "value_property_name")?,
            label_property_name: string(map, "label_property_name")?,
            input_option_label: string(map, "input_option_label")?,
        })
    }
}

impl ToMap for SupportedAttributeUiInputGst {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("query", &self.query)
            .string("value_property_name", &self.value_property_name)
            .string("label_property_name", &self.label_property_name)
            .string("input_option_label", &self.input_option_label)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedAttributeUiInputUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_option_label: Option<String>,
}

impl MapTo for SupportedAttributeUiInputUrl {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            url_endpoint: string(map, "url_endpoint")?,
            input_option_label: string(map, "input_option_label")?,
        })
    }
}

impl ToMap for SupportedAttributeUiInputUrl {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("url_endpoint", &self.url_endpoint)
            .string("input_option_label", &self.input_option_label)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationSupportedAuthorizationSubject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SupportAuthorizationSubjectAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl MapTo for IamServiceRegistrationSupportedAuthorizationSubject {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            attributes: block(map, "attributes")?,
            roles: strings(map, "roles")?,
        })
    }
}

impl ToMap for IamServiceRegistrationSupportedAuthorizationSubject {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .block("attributes", &self.attributes)
            .strings("roles", &self.roles)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportAuthorizationSubjectAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl MapTo for SupportAuthorizationSubjectAttribute {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            service_name: string(map, "service_name")?,
            resource_type: string(map, "resource_type")?,
        })
    }
}

impl ToMap for SupportAuthorizationSubjectAttribute {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("service_name", &self.service_name)
            .string("resource_type", &self.resource_type)
            .build()
    }
}

/// Role a service offers to its users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationSupportedRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<IamServiceRegistrationDescriptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<IamServiceRegistrationDisplayNameObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SupportedRoleOptions>,
}

impl MapTo for IamServiceRegistrationSupportedRole {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            id: string(map, "id")?,
            description: block(map, "description")?,
            display_name: block(map, "display_name")?,
            options: block(map, "options")?,
        })
    }
}

impl ToMap for IamServiceRegistrationSupportedRole {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("id", &self.id)
            .block("description", &self.description)
            .block("display_name", &self.display_name)
            .block("options", &self.options)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedRoleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl MapTo for SupportedRoleOptions {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            access_policy: boolean(map, "access_policy")?,
            policy_type: strings(map, "policy_type")?,
            account_type: string(map, "account_type")?,
        })
    }
}

impl ToMap for SupportedRoleOptions {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .boolean("access_policy", &self.access_policy)
            .strings("policy_type", &self.policy_type)
            .string("account_type", &self.account_type)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationSupportedNetwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_attributes: Option<Vec<EnvironmentAttribute>>,
}

impl MapTo for IamServiceRegistrationSupportedNetwork {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            environment_attributes: blocks(map, "environment_attributes")?,
        })
    }
}

impl ToMap for IamServiceRegistrationSupportedNetwork {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .blocks("environment_attributes", &self.environment_attributes)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnvironmentAttributeOptions>,
}

impl MapTo for EnvironmentAttribute {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            key: string(map, "key")?,
            values: strings(map, "values")?,
            options: block(map, "options")?,
        })
    }
}

impl ToMap for EnvironmentAttribute {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("key", &self.key)
            .strings("values", &self.values)
            .block("options", &self.options)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAttributeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl MapTo for EnvironmentAttributeOptions {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            hidden: boolean(map, "hidden")?,
        })
    }
}

impl ToMap for EnvironmentAttributeOptions {
    fn to_map(&self) -> Attributes {
        MapBuilder::new().boolean("hidden", &self.hidden).build()
    }
}

/// Changeable fields of an IAM registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamServiceRegistrationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<IamServiceRegistrationAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_policy_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<IamServiceRegistrationDisplayNameObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_hierarchy_attribute: Option<IamServiceRegistrationResourceHierarchyAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_anonymous_accesses: Option<Vec<IamServiceRegistrationSupportedAnonymousAccess>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_attributes: Option<Vec<IamServiceRegistrationSupportedAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_authorization_subjects:
        Option<Vec<IamServiceRegistrationSupportedAuthorizationSubject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_roles: Option<Vec<IamServiceRegistrationSupportedRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_network: Option<IamServiceRegistrationSupportedNetwork>,
}

/// Identifies one IAM registration by its programmatic name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IamRegistrationPath {
    pub product_id: String,
    pub programmatic_name: String,
    pub env: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateIamRegistrationOptions {
    pub product_id: String,
    pub name: String,
    pub env: Option<String>,
    pub enabled: Option<bool>,
    pub service_type: Option<String>,
    pub actions: Option<Vec<IamServiceRegistrationAction>>,
    pub additional_policy_scopes: Option<Vec<String>>,
    pub display_name: Option<IamServiceRegistrationDisplayNameObject>,
    pub parent_ids: Option<Vec<String>>,
    pub resource_hierarchy_attribute: Option<IamServiceRegistrationResourceHierarchyAttribute>,
    pub supported_anonymous_accesses: Option<Vec<IamServiceRegistrationSupportedAnonymousAccess>>,
    pub supported_attributes: Option<Vec<IamServiceRegistrationSupportedAttribute>>,
    pub supported_authorization_subjects:
        Option<Vec<IamServiceRegistrationSupportedAuthorizationSubject>>,
    pub supported_roles: Option<Vec<IamServiceRegistrationSupportedRole>>,
    pub supported_network: Option<IamServiceRegistrationSupportedNetwork>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sell_core::resource::Value;

    fn display_name() -> IamServiceRegistrationDisplayNameObject {
        IamServiceRegistrationDisplayNameObject {
            default: Some("View".to_string()),
            en: Some("View".to_string()),
            de: Some("Anzeigen".to_string()),
            ja: Some("表示".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn action_round_trips() {
        let action = IamServiceRegistrationAction {
            id: Some("pet-store.dashboard.view".to_string()),
            roles: Some(vec!["crn:v1:bluemix:public:iam::::serviceRole:Reader".to_string()]),
            description: Some(IamServiceRegistrationDescriptionObject {
                default: Some("View the dashboard".to_string()),
                ..Default::default()
            }),
            display_name: Some(display_name()),
            options: Some(IamServiceRegistrationActionOptions {
                hidden: Some(false),
            }),
        };
        assert_eq!(
            IamServiceRegistrationAction::map_to(&action.to_map()).unwrap(),
            action
        );
    }

    #[test]
    fn localized_strings_keep_default_key() {
        let map = display_name().to_map();
        assert_eq!(map.get("default"), Some(&Value::String("View".to_string())));
        assert!(!map.contains_key("fr"));
    }

    #[test]
    fn supported_network_round_trips() {
        let network = IamServiceRegistrationSupportedNetwork {
            environment_attributes: Some(vec![EnvironmentAttribute {
                key: Some("networkType".to_string()),
                values: Some(vec!["public".to_string(), "private".to_string()]),
                options: Some(EnvironmentAttributeOptions { hidden: Some(true) }),
            }]),
        };
        assert_eq!(
            IamServiceRegistrationSupportedNetwork::map_to(&network.to_map()).unwrap(),
            network
        );
    }

    #[test]
    fn supported_attribute_round_trips() {
        let attribute = IamServiceRegistrationSupportedAttribute {
            key: Some("region".to_string()),
            options: Some(SupportedAttributesOptions {
                operators: Some(vec!["stringEquals".to_string()]),
                hidden: Some(false),
                policy_types: Some(vec!["access".to_string()]),
                is_empty_value_supported: Some(true),
                resource_hierarchy: Some(SupportedAttributesOptionsResourceHierarchy {
                    key: Some(SupportedAttributesOptionsResourceHierarchyKey {
                        key: Some("store".to_string()),
                        value: Some("pets".to_string()),
                    }),
                    value: Some(SupportedAttributesOptionsResourceHierarchyValue {
                        key: Some("shelf".to_string()),
                    }),
                }),
                ..Default::default()
            }),
            display_name: Some(display_name()),
            description: None,
            ui: Some(SupportedAttributeUi {
                input_type: "selector".to_string(),
                input_details: Some(SupportedAttributeUiInputDetails {
                    input_details_type: "gst".to_string(),
                    values: Some(vec![SupportedAttributeUiInputValue {
                        value: Some("us-south".to_string()),
                        display_name: Some(display_name()),
                    }]),
                    gst: Some(SupportedAttributeUiInputGst {
                        query: Some("service_name:pet-store".to_string()),
                        value_property_name: Some("instance".to_string()),
                        input_option_label: Some("{name} - {instance_id}".to_string()),
                        ..Default::default()
                    }),
                    url: None,
                }),
            }),
        };
        assert_eq!(
            IamServiceRegistrationSupportedAttribute::map_to(&attribute.to_map()).unwrap(),
            attribute
        );
    }

    #[test]
    fn ui_without_input_type_is_rejected() {
        let err = SupportedAttributeUi::map_to(&Attributes::new()).unwrap_err();
        assert_eq!(
            err,
            crate::convert::ConvertError::MissingRequired {
                field: "input_type".to_string()
            }
        );
    }

    #[test]
    fn anonymous_access_properties_are_flattened_on_the_wire() {
        let mut additional_properties = BTreeMap::new();
        additional_properties.insert("accessGroup".to_string(), "public".to_string());
        let access = IamServiceRegistrationSupportedAnonymousAccess {
            attributes: Some(IamServiceRegistrationSupportedAnonymousAccessAttributes {
                account_id: "4a5c3c51b97a446fbb1d0e1ef089823c".to_string(),
                service_name: "pet-store".to_string(),
                additional_properties,
            }),
            roles: Some(vec!["crn:v1:bluemix:public:iam::::serviceRole:Reader".to_string()]),
        };

        assert_eq!(
            IamServiceRegistrationSupportedAnonymousAccess::map_to(&access.to_map()).unwrap(),
            access
        );
        assert_eq!(
            serde_json::to_value(&access).unwrap()["attributes"],
            serde_json::json!({
                "account_id": "4a5c3c51b97a446fbb1d0e1ef089823c",
                "service_name": "pet-store",
                "accessGroup": "public"
            })
        );
    }

    #[test]
    fn authorization_subject_and_hierarchy_round_trip() {
        let subject = IamServiceRegistrationSupportedAuthorizationSubject {
            attributes: Some(SupportAuthorizationSubjectAttribute {
                service_name: Some("pet-store".to_string()),
                resource_type: Some("shelf".to_string()),
            }),
            roles: Some(vec!["crn:v1:bluemix:public:iam::::serviceRole:Writer".to_string()]),
        };
        assert_eq!(
            IamServiceRegistrationSupportedAuthorizationSubject::map_to(&subject.to_map()).unwrap(),
            subject
        );

        let hierarchy = IamServiceRegistrationResourceHierarchyAttribute {
            key: Some("store".to_string()),
            value: Some("pets".to_string()),
        };
        assert_eq!(
            IamServiceRegistrationResourceHierarchyAttribute::map_to(&hierarchy.to_map()).unwrap(),
            hierarchy
        );
    }
}
