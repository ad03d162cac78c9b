//! Offline update preview
//!
//! Runs the real update handler against a client that records the merge
//! patch instead of sending it. Reads answer 404, so nothing is fetched and
//! every other call is refused.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sell_core::provider::ProviderResult;
use sell_core::resource::{Resource, ResourceId, State};

use crate::client::*;
use crate::models::*;
use crate::provider::PartnerCenterSellProvider;

const READ_ONLY: &str = "the update preview does not call the service";

/// Client that keeps the last update body
#[derive(Default)]
struct PreviewClient {
    patch: Mutex<Option<PatchBody>>,
}

impl PreviewClient {
    fn record(&self, patch: PatchBody) -> SdkResult<()> {
        let mut slot = self
            .patch
            .lock()
            .map_err(|_| SdkError::new("update preview state is poisoned"))?;
        *slot = Some(patch);
        Ok(())
    }

    fn take(&self) -> Option<PatchBody> {
        self.patch.lock().ok().and_then(|mut slot| slot.take())
    }
}

macro_rules! preview_api {
    ($( $create:ident, $get:ident, $update:ident, $delete:ident: $options:ty, $path:ty => $model:ty; )*) => {
        #[async_trait]
        impl PartnerCenterSellApi for PreviewClient {
            $(
                async fn $create(&self, _options: &$options) -> SdkResult<DetailedResponse<$model>> {
                    Err(SdkError::new(READ_ONLY))
                }

                async fn $get(&self, _path: &$path) -> SdkResult<DetailedResponse<$model>> {
                    Err(SdkError::not_found(READ_ONLY))
                }

                async fn $update(
                    &self,
                    _path: &$path,
                    patch: PatchBody,
                ) -> SdkResult<DetailedResponse<$model>> {
                    self.record(patch)?;
                    Ok(DetailedResponse::ok(<$model>::default()))
                }

                async fn $delete(&self, _path: &$path) -> SdkResult<DetailedResponse<()>> {
                    Err(SdkError::new(READ_ONLY))
                }
            )*
        }
    };
}

preview_api! {
    create_onboarding_product, get_onboarding_product, update_onboarding_product, delete_onboarding_product:
        CreateOnboardingProductOptions, ProductPath => OnboardingProduct;
    create_catalog_product, get_catalog_product, update_catalog_product, delete_catalog_product:
        CreateCatalogProductOptions, CatalogProductPath => GlobalCatalogProduct;
    create_catalog_plan, get_catalog_plan, update_catalog_plan, delete_catalog_plan:
        CreateCatalogPlanOptions, CatalogPlanPath => GlobalCatalogPlan;
    create_catalog_deployment, get_catalog_deployment, update_catalog_deployment, delete_catalog_deployment:
        CreateCatalogDeploymentOptions, CatalogDeploymentPath => GlobalCatalogDeployment;
    create_registration, get_registration, update_registration, delete_registration:
        CreateRegistrationOptions, RegistrationPath => Registration;
    create_resource_broker, get_resource_broker, update_resource_broker, delete_resource_broker:
        CreateResourceBrokerOptions, BrokerPath => Broker;
    create_iam_registration, get_iam_registration, update_iam_registration, delete_iam_registration:
        CreateIamRegistrationOptions, IamRegistrationPath => IamServiceRegistration;
}

struct PreviewSession {
    client: Arc<PreviewClient>,
}

impl ClientSession for PreviewSession {
    fn partner_center_sell_v1(&self) -> SdkResult<Arc<dyn PartnerCenterSellApi>> {
        Ok(self.client.clone() as Arc<dyn PartnerCenterSellApi>)
    }
}

/// Merge patch an update from `from` to `to` would send
///
/// Returns `None` when no patchable field changed. ForceNew changes and
/// malformed identifiers fail the same way a real update does.
pub async fn preview_update(
    env: Option<&str>,
    id: ResourceId,
    identifier: &str,
    from: &State,
    to: Resource,
) -> ProviderResult<Option<PatchBody>> {
    let client = Arc::new(PreviewClient::default());
    let mut provider = PartnerCenterSellProvider::new(Arc::new(PreviewSession {
        client: client.clone(),
    }));
    if let Some(env) = env {
        provider = provider.with_env(env);
    }

    provider.update_resource(id, identifier, from, to).await?;
    Ok(client.take())
}
