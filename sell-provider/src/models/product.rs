//! Onboarding product models

use sell_core::resource::Attributes;
use serde::{Deserialize, Serialize};

use crate::convert::{ConvertResult, MapBuilder, MapTo, ToMap, blocks, required_string, string};

/// Name and email of a person responsible for a product or registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryContact {
    pub name: String,
    pub email: String,
}

impl MapTo for PrimaryContact {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            name: required_string(map, "name")?,
            email: required_string(map, "email")?,
        })
    }
}

impl ToMap for PrimaryContact {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .required_string("name", &self.name)
            .required_string("email", &self.email)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProductSupport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_contacts: Option<Vec<OnboardingProductSupportEscalationContactItems>>,
}

impl MapTo for OnboardingProductSupport {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            escalation_contacts: blocks(map, "escalation_contacts")?,
        })
    }
}

impl ToMap for OnboardingProductSupport {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .blocks("escalation_contacts", &self.escalation_contacts)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProductSupportEscalationContactItems {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl MapTo for OnboardingProductSupportEscalationContactItems {
    fn map_to(map: &Attributes) -> ConvertResult<Self> {
        Ok(Self {
            name: string(map, "name")?,
            email: string(map, "email")?,
            role: string(map, "role")?,
        })
    }
}

impl ToMap for OnboardingProductSupportEscalationContactItems {
    fn to_map(&self) -> Attributes {
        MapBuilder::new()
            .string("name", &self.name)
            .string("email", &self.email)
            .string("role", &self.role)
            .build()
    }
}

/// Product as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<PrimaryContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccn_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ero_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unspsc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<OnboardingProductSupport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_catalog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_catalog_offering_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_catalog_offering_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_global_catalog_offering_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_registration_id: Option<String>,
}

/// Changeable fields of a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<PrimaryContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccn_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ero_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unspsc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<OnboardingProductSupport>,
}

/// Identifies one product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPath {
    pub product_id: String,
    pub env: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOnboardingProductOptions {
    pub env: Option<String>,
    pub product_type: String,
    pub primary_contact: PrimaryContact,
    pub eccn_number: Option<String>,
    pub ero_class: Option<String>,
    pub unspsc: Option<f64>,
    pub tax_assessment: Option<String>,
    pub support: Option<OnboardingProductSupport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sell_core::resource::Value;

    #[test]
    fn support_round_trips_through_attributes() {
        let support = OnboardingProductSupport {
            escalation_contacts: Some(vec![OnboardingProductSupportEscalationContactItems {
                name: Some("Jun Tanaka".to_string()),
                email: Some("jun@example.com".to_string()),
                role: Some("support lead".to_string()),
            }]),
        };
        assert_eq!(
            OnboardingProductSupport::map_to(&support.to_map()).unwrap(),
            support
        );
    }

    #[test]
    fn primary_contact_requires_email() {
        let mut map = Attributes::new();
        map.insert("name".to_string(), Value::String("Jun".to_string()));
        assert!(PrimaryContact::map_to(&map).is_err());
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = OnboardingProductPatch {
            eccn_number: Some("5D002".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"eccn_number": "5D002"})
        );
    }
}
