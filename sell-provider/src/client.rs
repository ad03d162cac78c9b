//! Partner Center Sell API client contract
//!
//! Handlers talk to the service only through [`PartnerCenterSellApi`]. A
//! [`ClientSession`] hands out the client and may fail, in which case the
//! handler reports an `initialize-client` error.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use crate::models::*;

/// HTTP status the service answers with when a resource does not exist
pub const NOT_FOUND: u16 = 404;

/// Errors returned by the SDK client
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SdkError {
    /// Status code of the failed response, if a response was received
    pub status_code: Option<u16>,
    pub message: String,
}

impl SdkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            message: message.into(),
        }
    }

    pub fn with_status(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(NOT_FOUND, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(NOT_FOUND)
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

/// Successful response with its status code
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedResponse<T> {
    pub status_code: u16,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            status_code: 200,
            result,
        }
    }

    pub fn created(result: T) -> Self {
        Self {
            status_code: 201,
            result,
        }
    }
}

impl DetailedResponse<()> {
    pub fn no_content() -> Self {
        Self {
            status_code: 204,
            result: (),
        }
    }
}

/// JSON merge-patch body sent by update operations
pub type PatchBody = Map<String, JsonValue>;

/// Partner Center Sell v1 operations, one create/get/update/delete family
/// per onboarding resource
#[async_trait]
pub trait PartnerCenterSellApi: Send + Sync {
    // Products

    async fn create_onboarding_product(
        &self,
        options: &CreateOnboardingProductOptions,
    ) -> SdkResult<DetailedResponse<OnboardingProduct>>;

    async fn get_onboarding_product(
        &self,
        path: &ProductPath,
    ) -> SdkResult<DetailedResponse<OnboardingProduct>>;

    async fn update_onboarding_product(
        &self,
        path: &ProductPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<OnboardingProduct>>;

    async fn delete_onboarding_product(
        &self,
        path: &ProductPath,
    ) -> SdkResult<DetailedResponse<()>>;

    // Catalog products

    async fn create_catalog_product(
        &self,
        options: &CreateCatalogProductOptions,
    ) -> SdkResult<DetailedResponse<GlobalCatalogProduct>>;

    async fn get_catalog_product(
        &self,
        path: &CatalogProductPath,
    ) -> SdkResult<DetailedResponse<GlobalCatalogProduct>>;

    async fn update_catalog_product(
        &self,
        path: &CatalogProductPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<GlobalCatalogProduct>>;

    async fn delete_catalog_product(
        &self,
        path: &CatalogProductPath,
    ) -> SdkResult<DetailedResponse<()>>;

    // Catalog plans

    async fn create_catalog_plan(
        &self,
        options: &CreateCatalogPlanOptions,
    ) -> SdkResult<DetailedResponse<GlobalCatalogPlan>>;

    async fn get_catalog_plan(
        &self,
        path: &CatalogPlanPath,
    ) -> SdkResult<DetailedResponse<GlobalCatalogPlan>>;

    async fn update_catalog_plan(
        &self,
        path: &CatalogPlanPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<GlobalCatalogPlan>>;

    async fn delete_catalog_plan(&self, path: &CatalogPlanPath)
    -> SdkResult<DetailedResponse<()>>;

    // Catalog deployments

    async fn create_catalog_deployment(
        &self,
        options: &CreateCatalogDeploymentOptions,
    ) -> SdkResult<DetailedResponse<GlobalCatalogDeployment>>;

    async fn get_catalog_deployment(
        &self,
        path: &CatalogDeploymentPath,
    ) -> SdkResult<DetailedResponse<GlobalCatalogDeployment>>;

    async fn update_catalog_deployment(
        &self,
        path: &CatalogDeploymentPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<GlobalCatalogDeployment>>;

    async fn delete_catalog_deployment(
        &self,
        path: &CatalogDeploymentPath,
    ) -> SdkResult<DetailedResponse<()>>;

    // Registrations

    async fn create_registration(
        &self,
        options: &CreateRegistrationOptions,
    ) -> SdkResult<DetailedResponse<Registration>>;

    async fn get_registration(
        &self,
        path: &RegistrationPath,
    ) -> SdkResult<DetailedResponse<Registration>>;

    async fn update_registration(
        &self,
        path: &RegistrationPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<Registration>>;

    async fn delete_registration(&self, path: &RegistrationPath)
    -> SdkResult<DetailedResponse<()>>;

    // Resource brokers

    async fn create_resource_broker(
        &self,
        options: &CreateResourceBrokerOptions,
    ) -> SdkResult<DetailedResponse<Broker>>;

    async fn get_resource_broker(&self, path: &BrokerPath) -> SdkResult<DetailedResponse<Broker>>;

    async fn update_resource_broker(
        &self,
        path: &BrokerPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<Broker>>;

    async fn delete_resource_broker(&self, path: &BrokerPath) -> SdkResult<DetailedResponse<()>>;

    // IAM registrations

    async fn create_iam_registration(
        &self,
        options: &CreateIamRegistrationOptions,
    ) -> SdkResult<DetailedResponse<IamServiceRegistration>>;

    async fn get_iam_registration(
        &self,
        path: &IamRegistrationPath,
    ) -> SdkResult<DetailedResponse<IamServiceRegistration>>;

    async fn update_iam_registration(
        &self,
        path: &IamRegistrationPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<IamServiceRegistration>>;

    async fn delete_iam_registration(
        &self,
        path: &IamRegistrationPath,
    ) -> SdkResult<DetailedResponse<()>>;
}

/// Source of configured API clients
pub trait ClientSession: Send + Sync {
    /// Client for the Partner Center Sell v1 API
    fn partner_center_sell_v1(&self) -> SdkResult<Arc<dyn PartnerCenterSellApi>>;
}
