//! Partner Center Sell Provider implementation
//!
//! This module routes resource operations to the per-resource handlers,
//! obtaining a client from the session for every operation.

use std::sync::Arc;

use sell_core::provider::{ProviderError, ProviderResult};
use sell_core::resource::{Attributes, Resource, ResourceId, State, Value};
use sell_core::resource_data::ResourceData;

use crate::client::{ClientSession, PartnerCenterSellApi};
use crate::handlers::{self, Op};
use crate::schemas::{SellSchemaConfig, get_schema_config};

/// CRUD operation routed to a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Call the handler of `$operation` in whichever module owns `$type_name`
macro_rules! dispatch {
    ($type_name:expr, $operation:expr, $client:expr, $d:expr; $($module:ident),* $(,)?) => {
        match $type_name {
            $(
                handlers::$module::RESOURCE => match $operation {
                    Operation::Create => handlers::$module::create($client, $d).await,
                    Operation::Read => handlers::$module::read($client, $d).await,
                    Operation::Update => handlers::$module::update($client, $d).await,
                    Operation::Delete => handlers::$module::delete($client, $d).await,
                },
            )*
            other => Err(ProviderError::new(format!("Unknown resource type: {}", other))),
        }
    };
}

/// Partner Center Sell Provider
pub struct PartnerCenterSellProvider {
    session: Arc<dyn ClientSession>,
    /// Environment used when a resource does not set `env`
    env: Option<String>,
}

impl PartnerCenterSellProvider {
    pub fn new(session: Arc<dyn ClientSession>) -> Self {
        Self { session, env: None }
    }

    /// Target `env` for every resource that does not name one
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    fn config(&self, id: &ResourceId) -> ProviderResult<SellSchemaConfig> {
        get_schema_config(&id.resource_type).ok_or_else(|| {
            ProviderError::new(format!("Unknown resource type: {}", id.resource_type))
                .for_resource(id.clone())
        })
    }

    fn with_default_env(&self, config: &SellSchemaConfig, mut attributes: Attributes) -> Attributes {
        if let Some(env) = &self.env
            && config.schema.attributes.contains_key("env")
            && !attributes.contains_key("env")
        {
            attributes.insert("env".to_string(), Value::String(env.clone()));
        }
        attributes
    }

    async fn run(
        &self,
        config: &SellSchemaConfig,
        operation: Operation,
        d: &mut ResourceData,
    ) -> ProviderResult<()> {
        let client: Arc<dyn PartnerCenterSellApi> = handlers::client(
            self.session.as_ref(),
            Op::new(config.resource_type_name, operation.name()),
        )?;
        let client = client.as_ref();
        log::debug!(
            "{} {} {}",
            operation.name(),
            config.resource_type_name,
            d.id()
        );

        dispatch!(config.resource_type_name, operation, client, d;
            product,
            catalog_product,
            catalog_plan,
            catalog_deployment,
            registration,
            resource_broker,
            iam_registration,
        )
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    /// Read a resource by its composite identifier
    pub async fn read_resource(
        &self,
        resource_type: &str,
        name: &str,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = ResourceId::new(resource_type, name);
        let config = self.config(&id)?;

        let identifier = match identifier {
            Some(identifier) if !identifier.is_empty() => identifier,
            _ => return Ok(State::not_found(id)),
        };

        let mut d = ResourceData::existing(identifier, self.with_default_env(&config, Attributes::new()));
        self.run(&config, Operation::Read, &mut d)
            .await
            .map_err(|e| e.for_resource(id.clone()))?;
        Ok(d.into_state(id))
    }

    /// Create a resource and read it back
    pub async fn create_resource(&self, resource: Resource) -> ProviderResult<State> {
        let config = self.config(&resource.id)?;

        let mut d = ResourceData::new(self.with_default_env(&config, resource.attributes));
        self.run(&config, Operation::Create, &mut d)
            .await
            .map_err(|e| e.for_resource(resource.id.clone()))?;
        Ok(d.into_state(resource.id))
    }

    /// Update a resource in place and read it back
    pub async fn update_resource(
        &self,
        id: ResourceId,
        identifier: &str,
        from: &State,
        to: Resource,
    ) -> ProviderResult<State> {
        let config = self.config(&id)?;

        let mut d = ResourceData::with_prior(
            identifier,
            self.with_default_env(&config, from.attributes.clone()),
            self.with_default_env(&config, to.attributes),
        );
        self.run(&config, Operation::Update, &mut d)
            .await
            .map_err(|e| e.for_resource(id.clone()))?;
        Ok(d.into_state(id))
    }

    /// Delete a resource
    pub async fn delete_resource(
        &self,
        id: &ResourceId,
        identifier: &str,
        state: &State,
    ) -> ProviderResult<()> {
        let config = self.config(id)?;

        let mut d = ResourceData::existing(
            identifier,
            self.with_default_env(&config, state.attributes.clone()),
        );
        self.run(&config, Operation::Delete, &mut d)
            .await
            .map_err(|e| e.for_resource(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::product::sample_attributes;
    use crate::testing::{MockApi, MockSession, PRODUCT_ID};

    fn provider(api: &Arc<MockApi>) -> PartnerCenterSellProvider {
        PartnerCenterSellProvider::new(Arc::new(MockSession::with(api.clone())))
    }

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    fn product() -> Resource {
        Resource::new("ibm_onboarding_product", "pet_store").with_attributes(sample_attributes())
    }

    #[tokio::test]
    async fn create_returns_state_with_identifier() {
        let api = MockApi::new();
        let state = provider(&api).create_resource(product()).await.unwrap();

        assert!(state.exists);
        assert_eq!(state.identifier.as_deref(), Some(PRODUCT_ID));
        assert_eq!(state.attributes.get("type"), Some(&s("software")));
        assert_eq!(state.id, ResourceId::new("ibm_onboarding_product", "pet_store"));
    }

    #[tokio::test]
    async fn unknown_type_is_rejected() {
        let api = MockApi::new();
        let err = provider(&api)
            .read_resource("ibm_onboarding_widget", "w", Some("x"))
            .await
            .unwrap_err();

        assert_eq!(err.message, "Unknown resource type: ibm_onboarding_widget");
        assert_eq!(
            err.resource_id,
            Some(ResourceId::new("ibm_onboarding_widget", "w"))
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn read_without_identifier_is_not_found() {
        let api = MockApi::new();
        let state = provider(&api)
            .read_resource("ibm_onboarding_product", "pet_store", None)
            .await
            .unwrap();
        assert!(!state.exists);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn broken_session_fails_at_client_initialization() {
        let provider = PartnerCenterSellProvider::new(Arc::new(MockSession::broken()));
        let err = provider.create_resource(product()).await.unwrap_err();

        assert_eq!(err.step(), Some("initialize-client"));
        assert_eq!(
            err.message,
            "no credentials configured for partner center sell"
        );
        let context = err.context.as_ref().unwrap();
        assert_eq!(context.resource, "ibm_onboarding_product");
        assert_eq!(context.operation, "create");
    }

    #[tokio::test]
    async fn default_env_applies_only_when_unset() {
        let api = MockApi::new();
        let provider = provider(&api).with_env("staging");

        provider.create_resource(product()).await.unwrap();
        let mut explicit = product();
        explicit.attributes.insert("env".to_string(), s("current"));
        provider.create_resource(explicit).await.unwrap();

        let envs: Vec<Option<String>> = api
            .calls()
            .into_iter()
            .filter(|c| c.name == "create_onboarding_product")
            .map(|c| c.env)
            .collect();
        assert_eq!(
            envs,
            vec![Some("staging".to_string()), Some("current".to_string())]
        );
    }

    #[tokio::test]
    async fn default_env_skips_resources_without_env() {
        let api = MockApi::new();
        let provider = provider(&api).with_env("staging");
        let mut contact = Attributes::new();
        contact.insert("name".to_string(), s("Petra Novak"));
        contact.insert("email".to_string(), s("petra@example.com"));
        let registration = Resource::new("ibm_onboarding_registration", "company")
            .with_attribute("account_id", s("4a5c3c51b97a446fbb1d0e1ef089823b"))
            .with_attribute("company_name", s("Example Corp"))
            .with_attribute("primary_contact", Value::block(contact));

        let state = provider.create_resource(registration).await.unwrap();
        assert!(!state.attributes.contains_key("env"));
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let api = MockApi::new();
        let provider = provider(&api);
        let created = provider.create_resource(product()).await.unwrap();
        let identifier = created.identifier.clone().unwrap();

        let mut desired = product();
        desired.attributes.insert("ero_class".to_string(), s("A6VR"));
        let updated = provider
            .update_resource(created.id.clone(), &identifier, &created, desired)
            .await
            .unwrap();
        assert_eq!(updated.attributes.get("ero_class"), Some(&s("A6VR")));

        provider
            .delete_resource(&updated.id, &identifier, &updated)
            .await
            .unwrap();
        let gone = provider
            .read_resource("ibm_onboarding_product", "pet_store", Some(&identifier))
            .await
            .unwrap();
        assert!(!gone.exists);
    }

    #[tokio::test]
    async fn handler_errors_carry_the_resource_id() {
        let api = MockApi::new();
        let err = provider(&api)
            .read_resource("ibm_onboarding_catalog_plan", "lite", Some("not-composite"))
            .await
            .unwrap_err();

        assert_eq!(err.step(), Some("sep-id-parts"));
        assert_eq!(
            err.resource_id,
            Some(ResourceId::new("ibm_onboarding_catalog_plan", "lite"))
        );
    }
}
