//! Resource broker models

use sell_core::resource::Attributes;
use serde::{Deserialize, Serialize};

use crate::convert::{ConvertResult, MapBuilder, MapTo, ToMap, string};

/// Resource broker as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Broker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_context_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub broker_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<BrokerEventUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<BrokerEventUser>,
}

/// User who created or last changed a broker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerEventUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl MapTo for BrokerEventUser {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            user_id: string(map, "user_id")?,
            user_name: string(map, "user_name")?,
        })
    }
}

impl ToMap for BrokerEventUser {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("user_id", &self.user_id)
            .string("user_name", &self.user_name)
            .build()
    }
}

/// Changeable fields of a broker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_context_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrokerPath {
    pub broker_id: String,
    pub env: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateResourceBrokerOptions {
    pub env: Option<String>,
    pub auth_scheme: String,
    pub name: String,
    pub broker_url: String,
    pub broker_type: String,
    pub auth_username: Option<String>,
    pub auth_password: Option<String>,
    pub resource_group_crn: Option<String>,
    pub state: Option<String>,
    pub allow_context_updates: Option<bool>,
    pub catalog_type: Option<String>,
    pub region: Option<String>,
}
