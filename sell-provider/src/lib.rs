//! Sell Partner Center Provider
//!
//! Manages IBM Partner Center Sell onboarding resources: products, global
//! catalog products, plans and deployments, registrations, resource brokers
//! and IAM registrations.
//!
//! ## Module Structure
//!
//! - `client` - SDK client contract and session
//! - `convert` - Conversion between attribute maps and API models
//! - `handlers` - Create, read, update and delete per resource type
//! - `models` - API request and response models
//! - `preview` - Offline merge-patch preview of an update
//! - `provider` - PartnerCenterSellProvider implementation
//! - `resources` - Resource type definitions
//! - `schemas` - Resource schemas and patchable fields

pub mod client;
pub mod convert;
pub mod handlers;
pub mod models;
pub mod preview;
pub mod provider;
pub mod resources;
pub mod schemas;

#[cfg(test)]
mod testing;

// Re-export main types
pub use client::{ClientSession, PartnerCenterSellApi, SdkError};
pub use provider::PartnerCenterSellProvider;

use sell_core::provider::{BoxFuture, Provider, ProviderResult};
use sell_core::resource::{Resource, ResourceId, State};

use resources::resource_types;

// =============================================================================
// Provider Trait Implementation
// =============================================================================

impl Provider for PartnerCenterSellProvider {
    fn name(&self) -> &'static str {
        "partner-center-sell"
    }

    fn resource_types(&self) -> Vec<Box<dyn sell_core::provider::ResourceType>> {
        resource_types()
    }

    fn read(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.map(|s| s.to_string());
        Box::pin(async move {
            self.read_resource(&id.resource_type, &id.name, identifier.as_deref())
                .await
        })
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move { self.create_resource(resource).await })
    }

    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let from = from.clone();
        let to = to.clone();
        Box::pin(async move { self.update_resource(id, &identifier, &from, to).await })
    }

    fn delete(
        &self,
        id: &ResourceId,
        identifier: &str,
        state: &State,
    ) -> BoxFuture<'_, ProviderResult<()>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let state = state.clone();
        Box::pin(async move { self.delete_resource(&id, &identifier, &state).await })
    }
}
