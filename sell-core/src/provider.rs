//! Provider - Trait abstracting resource operations
//!
//! A Provider defines operations for a specific service. It is responsible
//! for converting desired resources into actual API calls.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::resource::{Resource, ResourceId, State};
use crate::schema::ResourceSchema;

/// Where an error happened: resource type, CRUD operation and optional step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Resource type (e.g., "ibm_onboarding_catalog_deployment")
    pub resource: String,
    /// "create", "read", "update", "delete" or "import"
    pub operation: String,
    /// Step inside the operation (e.g., "parse-metadata", "sep-id-parts")
    pub step: Option<String>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resource: {}, operation: {}",
            self.resource, self.operation
        )?;
        if let Some(ref step) = self.step {
            write!(f, ", step: {}", step)?;
        }
        Ok(())
    }
}

/// Error type for Provider operations
#[derive(Debug)]
pub struct ProviderError {
    pub message: String,
    pub resource_id: Option<ResourceId>,
    pub context: Option<ErrorContext>,
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref id) = self.resource_id {
            write!(f, "[{}.{}] {}", id.resource_type, id.name, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource_id: None,
            context: None,
            cause: None,
        }
    }

    /// Error raised at a named step of an operation
    pub fn discriminated(
        message: impl Into<String>,
        resource: &str,
        operation: &str,
        step: &str,
    ) -> Self {
        Self::new(message).with_context(resource, operation, Some(step))
    }

    pub fn for_resource(mut self, id: ResourceId) -> Self {
        self.resource_id = Some(id);
        self
    }

    pub fn with_context(mut self, resource: &str, operation: &str, step: Option<&str>) -> Self {
        self.context = Some(ErrorContext {
            resource: resource.to_string(),
            operation: operation.to_string(),
            step: step.map(str::to_string),
        });
        self
    }

    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Step label, if any
    pub fn step(&self) -> Option<&str> {
        self.context.as_ref().and_then(|c| c.step.as_deref())
    }

    /// Multi-line rendering for debug logs
    pub fn debug_message(&self) -> String {
        let mut out = format!("Error: {}", self.message);
        if let Some(ref context) = self.context {
            out.push_str(&format!("\n---\n{}", context));
        }
        if let Some(ref cause) = self.cause {
            out.push_str(&format!("\ncaused by: {}", cause));
        }
        out
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Return type for async operations
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Definition of resource types that a Provider can handle
pub trait ResourceType: Send + Sync {
    /// Resource type name (e.g., "ibm_onboarding_product")
    fn name(&self) -> &'static str;

    /// Attribute schema for this resource type
    fn schema(&self) -> ResourceSchema;
}

/// Main Provider trait
///
/// All operations are async and involve side effects.
pub trait Provider: Send + Sync {
    /// Name of this Provider (e.g., "partner-center-sell")
    fn name(&self) -> &'static str;

    /// List of resource types this Provider can handle
    fn resource_types(&self) -> Vec<Box<dyn ResourceType>>;

    /// Get the current state of a resource
    ///
    /// Returns `State::not_found()` if the resource does not exist or no
    /// identifier is known.
    fn read(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>>;

    /// Create a resource
    ///
    /// Returns State with identifier set to the composite ID
    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>>;

    /// Update a resource in place
    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>>;

    /// Delete a resource
    fn delete(
        &self,
        id: &ResourceId,
        identifier: &str,
        state: &State,
    ) -> BoxFuture<'_, ProviderResult<()>>;

    /// Adopt an existing resource by its identifier
    fn import(&self, id: &ResourceId, identifier: &str) -> BoxFuture<'_, ProviderResult<State>> {
        self.read(id, Some(identifier))
    }
}

/// Provider implementation for Box<dyn Provider>
/// This enables dynamic dispatch for Providers
impl Provider for Box<dyn Provider> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
        (**self).resource_types()
    }

    fn read(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        (**self).read(id, identifier)
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        (**self).create(resource)
    }

    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        (**self).update(id, identifier, from, to)
    }

    fn delete(
        &self,
        id: &ResourceId,
        identifier: &str,
        state: &State,
    ) -> BoxFuture<'_, ProviderResult<()>> {
        (**self).delete(id, identifier, state)
    }

    fn import(&self, id: &ResourceId, identifier: &str) -> BoxFuture<'_, ProviderResult<State>> {
        (**self).import(id, identifier)
    }
}
