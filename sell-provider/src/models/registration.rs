//! Partner registration models

use serde::{Deserialize, Serialize};

use super::product::PrimaryContact;

/// Registration as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<PrimaryContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_private_catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_access_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Changeable fields of a registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<PrimaryContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_private_catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_access_group: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationPath {
    pub registration_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRegistrationOptions {
    pub account_id: String,
    pub company_name: String,
    pub primary_contact: PrimaryContact,
    pub default_private_catalog_id: Option<String>,
    pub provider_access_group: Option<String>,
}
