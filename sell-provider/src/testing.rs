//! In-memory Partner Center Sell client for handler tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::client::*;
use crate::models::*;

pub const PRODUCT_ID: &str = "4a5c3c51b97a446fbb1d0e1ef089823b:o:5e3e9d17-6f7e-4b43-8a3c-8d0ae1d4ef5c";

/// One recorded client call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Snake-case operation, e.g. `update_catalog_plan`
    pub name: &'static str,
    /// Store key of the addressed object
    pub key: String,
    pub env: Option<String>,
    pub patch: Option<PatchBody>,
}

#[derive(Default)]
pub struct MockApi {
    store: Mutex<HashMap<String, JsonValue>>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<&'static str, SdkError>>,
    next_id: AtomicUsize,
    drop_ids: AtomicBool,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every later `name` call fail with `err`
    pub fn fail(&self, name: &'static str, err: SdkError) {
        self.failures.lock().unwrap().insert(name, err);
    }

    /// Strip `id` from every later create response
    pub fn answer_without_ids(&self) {
        self.drop_ids.store(true, Ordering::SeqCst);
    }

    /// Put an object into the store as if the service held it
    pub fn seed<T: Serialize>(&self, key: &str, model: &T) {
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), serde_json::to_value(model).unwrap());
    }

    pub fn stored(&self, key: &str) -> Option<JsonValue> {
        self.store.lock().unwrap().get(key).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|c| c.name).collect()
    }

    /// Patch body sent by the last `name` call
    pub fn last_patch(&self, name: &str) -> Option<PatchBody> {
        self.calls()
            .into_iter()
            .rev()
            .find(|c| c.name == name)
            .and_then(|c| c.patch)
    }

    fn record(
        &self,
        name: &'static str,
        key: &str,
        env: &Option<String>,
        patch: Option<&PatchBody>,
    ) -> SdkResult<()> {
        self.calls.lock().unwrap().push(Call {
            name,
            key: key.to_string(),
            env: env.clone(),
            patch: patch.cloned(),
        });
        match self.failures.lock().unwrap().get(name) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn new_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn insert<T: Serialize + DeserializeOwned>(
        &self,
        key: String,
        model: T,
    ) -> SdkResult<DetailedResponse<T>> {
        let mut value = serde_json::to_value(&model).map_err(|e| SdkError::new(e.to_string()))?;
        self.store.lock().unwrap().insert(key, value.clone());
        if !self.drop_ids.load(Ordering::SeqCst) {
            return Ok(DetailedResponse::created(model));
        }
        if let Some(object) = value.as_object_mut() {
            object.remove("id");
        }
        let model = serde_json::from_value(value).map_err(|e| SdkError::new(e.to_string()))?;
        Ok(DetailedResponse::created(model))
    }

    fn fetch<T: DeserializeOwned>(&self, key: &str) -> SdkResult<DetailedResponse<T>> {
        let value = self
            .stored(key)
            .ok_or_else(|| SdkError::not_found(format!("{} not found", key)))?;
        let model = serde_json::from_value(value).map_err(|e| SdkError::new(e.to_string()))?;
        Ok(DetailedResponse::ok(model))
    }

    fn merge<T: DeserializeOwned>(&self, key: &str, patch: &PatchBody) -> SdkResult<DetailedResponse<T>> {
        {
            let mut store = self.store.lock().unwrap();
            let target = store
                .get_mut(key)
                .ok_or_else(|| SdkError::not_found(format!("{} not found", key)))?;
            merge_patch(target, &JsonValue::Object(patch.clone()));
        }
        self.fetch(key)
    }

    fn remove(&self, key: &str) -> SdkResult<DetailedResponse<()>> {
        match self.store.lock().unwrap().remove(key) {
            Some(_) => Ok(DetailedResponse::no_content()),
            None => Err(SdkError::not_found(format!("{} not found", key))),
        }
    }
}

/// JSON merge patch: `null` removes a key, objects merge, anything else replaces
fn merge_patch(target: &mut JsonValue, patch: &JsonValue) {
    let JsonValue::Object(entries) = patch else {
        *target = patch.clone();
        return;
    };
    if !target.is_object() {
        *target = JsonValue::Object(Default::default());
    }
    if let JsonValue::Object(map) = target {
        for (key, value) in entries {
            if value.is_null() {
                map.remove(key);
            } else {
                merge_patch(map.entry(key.clone()).or_insert(JsonValue::Null), value);
            }
        }
    }
}

pub fn product_key(path: &ProductPath) -> String {
    format!("product/{}", path.product_id)
}

pub fn catalog_product_key(path: &CatalogProductPath) -> String {
    format!("catalog_product/{}/{}", path.product_id, path.catalog_product_id)
}

pub fn catalog_plan_key(path: &CatalogPlanPath) -> String {
    format!(
        "catalog_plan/{}/{}/{}",
        path.product_id, path.catalog_product_id, path.catalog_plan_id
    )
}

pub fn catalog_deployment_key(path: &CatalogDeploymentPath) -> String {
    format!(
        "catalog_deployment/{}/{}/{}/{}",
        path.product_id, path.catalog_product_id, path.catalog_plan_id, path.catalog_deployment_id
    )
}

pub fn registration_key(path: &RegistrationPath) -> String {
    format!("registration/{}", path.registration_id)
}

pub fn broker_key(path: &BrokerPath) -> String {
    format!("broker/{}", path.broker_id)
}

pub fn iam_key(path: &IamRegistrationPath) -> String {
    format!("iam/{}/{}", path.product_id, path.programmatic_name)
}

#[async_trait]
impl PartnerCenterSellApi for MockApi {
    async fn create_onboarding_product(
        &self,
        options: &CreateOnboardingProductOptions,
    ) -> SdkResult<DetailedResponse<OnboardingProduct>> {
        let path = ProductPath {
            product_id: PRODUCT_ID.to_string(),
            env: options.env.clone(),
        };
        let key = product_key(&path);
        self.record("create_onboarding_product", &key, &options.env, None)?;
        self.insert(
            key,
            OnboardingProduct {
                id: Some(path.product_id),
                account_id: Some("4a5c3c51b97a446fbb1d0e1ef089823b".to_string()),
                product_type: Some(options.product_type.clone()),
                primary_contact: Some(options.primary_contact.clone()),
                eccn_number: options.eccn_number.clone(),
                ero_class: options.ero_class.clone(),
                unspsc: options.unspsc,
                tax_assessment: options.tax_assessment.clone(),
                support: options.support.clone(),
                private_catalog_id: Some("pc-1".to_string()),
                global_catalog_offering_id: Some("gc-1".to_string()),
                ..Default::default()
            },
        )
    }

    async fn get_onboarding_product(
        &self,
        path: &ProductPath,
    ) -> SdkResult<DetailedResponse<OnboardingProduct>> {
        let key = product_key(path);
        self.record("get_onboarding_product", &key, &path.env, None)?;
        self.fetch(&key)
    }

    async fn update_onboarding_product(
        &self,
        path: &ProductPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<OnboardingProduct>> {
        let key = product_key(path);
        self.record("update_onboarding_product", &key, &path.env, Some(&patch))?;
        self.merge(&key, &patch)
    }

    async fn delete_onboarding_product(
        &self,
        path: &ProductPath,
    ) -> SdkResult<DetailedResponse<()>> {
        let key = product_key(path);
        self.record("delete_onboarding_product", &key, &path.env, None)?;
        self.remove(&key)
    }

    async fn create_catalog_product(
        &self,
        options: &CreateCatalogProductOptions,
    ) -> SdkResult<DetailedResponse<GlobalCatalogProduct>> {
        let id = options
            .object_id
            .clone()
            .unwrap_or_else(|| self.new_id("catalog-product"));
        let key = catalog_product_key(&CatalogProductPath {
            product_id: options.product_id.clone(),
            catalog_product_id: id.clone(),
            env: None,
        });
        self.record("create_catalog_product", &key, &options.env, None)?;
        self.insert(
            key,
            GlobalCatalogProduct {
                id: Some(id.clone()),
                object_id: options.object_id.clone(),
                name: Some(options.name.clone()),
                active: Some(options.active),
                disabled: Some(options.disabled),
                kind: Some(options.kind.clone()),
                overview_ui: options.overview_ui.clone(),
                tags: Some(options.tags.clone()),
                images: options.images.clone(),
                object_provider: Some(options.object_provider.clone()),
                metadata: options.metadata.clone(),
                geo_tags: Some(vec!["global".to_string()]),
                url: Some(format!("https://globalcatalog.example/api/v1/{}", id)),
            },
        )
    }

    async fn get_catalog_product(
        &self,
        path: &CatalogProductPath,
    ) -> SdkResult<DetailedResponse<GlobalCatalogProduct>> {
        let key = catalog_product_key(path);
        self.record("get_catalog_product", &key, &path.env, None)?;
        self.fetch(&key)
    }

    async fn update_catalog_product(
        &self,
        path: &CatalogProductPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<GlobalCatalogProduct>> {
        let key = catalog_product_key(path);
        self.record("update_catalog_product", &key, &path.env, Some(&patch))?;
        self.merge(&key, &patch)
    }

    async fn delete_catalog_product(
        &self,
        path: &CatalogProductPath,
    ) -> SdkResult<DetailedResponse<()>> {
        let key = catalog_product_key(path);
        self.record("delete_catalog_product", &key, &path.env, None)?;
        self.remove(&key)
    }

    async fn create_catalog_plan(
        &self,
        options: &CreateCatalogPlanOptions,
    ) -> SdkResult<DetailedResponse<GlobalCatalogPlan>> {
        let id = options
            .object_id
            .clone()
            .unwrap_or_else(|| self.new_id("plan"));
        let key = catalog_plan_key(&CatalogPlanPath {
            product_id: options.product_id.clone(),
            catalog_product_id: options.catalog_product_id.clone(),
            catalog_plan_id: id.clone(),
            env: None,
        });
        self.record("create_catalog_plan", &key, &options.env, None)?;
        self.insert(
            key,
            GlobalCatalogPlan {
                id: Some(id.clone()),
                object_id: options.object_id.clone(),
                name: Some(options.name.clone()),
                active: Some(options.active),
                disabled: Some(options.disabled),
                kind: Some(options.kind.clone()),
                overview_ui: options.overview_ui.clone(),
                tags: Some(options.tags.clone()),
                object_provider: Some(options.object_provider.clone()),
                metadata: options.metadata.clone(),
                geo_tags: Some(vec!["global".to_string()]),
                url: Some(format!("https://globalcatalog.example/api/v1/{}", id)),
            },
        )
    }

    async fn get_catalog_plan(
        &self,
        path: &CatalogPlanPath,
    ) -> SdkResult<DetailedResponse<GlobalCatalogPlan>> {
        let key = catalog_plan_key(path);
        self.record("get_catalog_plan", &key, &path.env, None)?;
        self.fetch(&key)
    }

    async fn update_catalog_plan(
        &self,
        path: &CatalogPlanPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<GlobalCatalogPlan>> {
        let key = catalog_plan_key(path);
        self.record("update_catalog_plan", &key, &path.env, Some(&patch))?;
        self.merge(&key, &patch)
    }

    async fn delete_catalog_plan(
        &self,
        path: &CatalogPlanPath,
    ) -> SdkResult<DetailedResponse<()>> {
        let key = catalog_plan_key(path);
        self.record("delete_catalog_plan", &key, &path.env, None)?;
        self.remove(&key)
    }

    async fn create_catalog_deployment(
        &self,
        options: &CreateCatalogDeploymentOptions,
    ) -> SdkResult<DetailedResponse<GlobalCatalogDeployment>> {
        let id = options
            .object_id
            .clone()
            .unwrap_or_else(|| self.new_id("deployment"));
        let key = catalog_deployment_key(&CatalogDeploymentPath {
            product_id: options.product_id.clone(),
            catalog_product_id: options.catalog_product_id.clone(),
            catalog_plan_id: options.catalog_plan_id.clone(),
            catalog_deployment_id: id.clone(),
            env: None,
        });
        self.record("create_catalog_deployment", &key, &options.env, None)?;
        self.insert(
            key,
            GlobalCatalogDeployment {
                id: Some(id.clone()),
                object_id: options.object_id.clone(),
                name: Some(options.name.clone()),
                active: Some(options.active),
                disabled: Some(options.disabled),
                kind: Some(options.kind.clone()),
                overview_ui: options.overview_ui.clone(),
                tags: Some(options.tags.clone()),
                object_provider: Some(options.object_provider.clone()),
                metadata: options.metadata.clone(),
                geo_tags: Some(vec!["eu-de".to_string()]),
                url: Some(format!("https://globalcatalog.example/api/v1/{}", id)),
            },
        )
    }

    async fn get_catalog_deployment(
        &self,
        path: &CatalogDeploymentPath,
    ) -> SdkResult<DetailedResponse<GlobalCatalogDeployment>> {
        let key = catalog_deployment_key(path);
        self.record("get_catalog_deployment", &key, &path.env, None)?;
        self.fetch(&key)
    }

    async fn update_catalog_deployment(
        &self,
        path: &CatalogDeploymentPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<GlobalCatalogDeployment>> {
        let key = catalog_deployment_key(path);
        self.record("update_catalog_deployment", &key, &path.env, Some(&patch))?;
        self.merge(&key, &patch)
    }

    async fn delete_catalog_deployment(
        &self,
        path: &CatalogDeploymentPath,
    ) -> SdkResult<DetailedResponse<()>> {
        let key = catalog_deployment_key(path);
        self.record("delete_catalog_deployment", &key, &path.env, None)?;
        self.remove(&key)
    }

    async fn create_registration(
        &self,
        options: &CreateRegistrationOptions,
    ) -> SdkResult<DetailedResponse<Registration>> {
        let id = self.new_id("registration");
        let key = registration_key(&RegistrationPath {
            registration_id: id.clone(),
        });
        self.record("create_registration", &key, &None, None)?;
        self.insert(
            key,
            Registration {
                id: Some(id),
                account_id: Some(options.account_id.clone()),
                company_name: Some(options.company_name.clone()),
                primary_contact: Some(options.primary_contact.clone()),
                default_private_catalog_id: options.default_private_catalog_id.clone(),
                provider_access_group: options.provider_access_group.clone(),
                created_at: Some("2026-10-16T08:00:00Z".to_string()),
                updated_at: Some("2026-10-16T08:00:00Z".to_string()),
            },
        )
    }

    async fn get_registration(
        &self,
        path: &RegistrationPath,
    ) -> SdkResult<DetailedResponse<Registration>> {
        let key = registration_key(path);
        self.record("get_registration", &key, &None, None)?;
        self.fetch(&key)
    }

    async fn update_registration(
        &self,
        path: &RegistrationPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<Registration>> {
        let key = registration_key(path);
        self.record("update_registration", &key, &None, Some(&patch))?;
        self.merge(&key, &patch)
    }

    async fn delete_registration(
        &self,
        path: &RegistrationPath,
    ) -> SdkResult<DetailedResponse<()>> {
        let key = registration_key(path);
        self.record("delete_registration", &key, &None, None)?;
        self.remove(&key)
    }

    async fn create_resource_broker(
        &self,
        options: &CreateResourceBrokerOptions,
    ) -> SdkResult<DetailedResponse<Broker>> {
        let id = self.new_id("broker");
        let key = broker_key(&BrokerPath {
            broker_id: id.clone(),
            env: None,
        });
        self.record("create_resource_broker", &key, &options.env, None)?;
        self.insert(
            key,
            Broker {
                id: Some(id.clone()),
                auth_username: options.auth_username.clone(),
                auth_password: options.auth_password.clone(),
                auth_scheme: Some(options.auth_scheme.clone()),
                resource_group_crn: options.resource_group_crn.clone(),
                state: options.state.clone(),
                broker_url: Some(options.broker_url.clone()),
                allow_context_updates: options.allow_context_updates,
                catalog_type: options.catalog_type.clone(),
                broker_type: Some(options.broker_type.clone()),
                name: Some(options.name.clone()),
                region: options.region.clone(),
                account_id: Some("4a5c3c51b97a446fbb1d0e1ef089823b".to_string()),
                crn: Some(format!("crn:v1:bluemix:public:resource-controller::a/4a5c::broker:{}", id)),
                guid: Some(id),
                created_by: Some(BrokerEventUser {
                    user_id: Some("IBMid-1".to_string()),
                    user_name: Some("ops@example.com".to_string()),
                }),
                ..Default::default()
            },
        )
    }

    async fn get_resource_broker(&self, path: &BrokerPath) -> SdkResult<DetailedResponse<Broker>> {
        let key = broker_key(path);
        self.record("get_resource_broker", &key, &path.env, None)?;
        self.fetch(&key)
    }

    async fn update_resource_broker(
        &self,
        path: &BrokerPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<Broker>> {
        let key = broker_key(path);
        self.record("update_resource_broker", &key, &path.env, Some(&patch))?;
        self.merge(&key, &patch)
    }

    async fn delete_resource_broker(&self, path: &BrokerPath) -> SdkResult<DetailedResponse<()>> {
        let key = broker_key(path);
        self.record("delete_resource_broker", &key, &path.env, None)?;
        self.remove(&key)
    }

    async fn create_iam_registration(
        &self,
        options: &CreateIamRegistrationOptions,
    ) -> SdkResult<DetailedResponse<IamServiceRegistration>> {
        let key = iam_key(&IamRegistrationPath {
            product_id: options.product_id.clone(),
            programmatic_name: options.name.clone(),
            env: None,
        });
        self.record("create_iam_registration", &key, &options.env, None)?;
        self.insert(
            key,
            IamServiceRegistration {
                name: Some(options.name.clone()),
                enabled: options.enabled,
                service_type: options.service_type.clone(),
                actions: options.actions.clone(),
                additional_policy_scopes: options.additional_policy_scopes.clone(),
                display_name: options.display_name.clone(),
                parent_ids: options.parent_ids.clone(),
                resource_hierarchy_attribute: options.resource_hierarchy_attribute.clone(),
                supported_anonymous_accesses: options.supported_anonymous_accesses.clone(),
                supported_attributes: options.supported_attributes.clone(),
                supported_authorization_subjects: options.supported_authorization_subjects.clone(),
                supported_roles: options.supported_roles.clone(),
                supported_network: options.supported_network.clone(),
            },
        )
    }

    async fn get_iam_registration(
        &self,
        path: &IamRegistrationPath,
    ) -> SdkResult<DetailedResponse<IamServiceRegistration>> {
        let key = iam_key(path);
        self.record("get_iam_registration", &key, &path.env, None)?;
        self.fetch(&key)
    }

    async fn update_iam_registration(
        &self,
        path: &IamRegistrationPath,
        patch: PatchBody,
    ) -> SdkResult<DetailedResponse<IamServiceRegistration>> {
        let key = iam_key(path);
        self.record("update_iam_registration", &key, &path.env, Some(&patch))?;
        self.merge(&key, &patch)
    }

    async fn delete_iam_registration(
        &self,
        path: &IamRegistrationPath,
    ) -> SdkResult<DetailedResponse<()>> {
        let key = iam_key(path);
        self.record("delete_iam_registration", &key, &path.env, None)?;
        self.remove(&key)
    }
}

/// Session handing out a [`MockApi`], or failing when it has none
pub struct MockSession {
    pub api: Option<Arc<MockApi>>,
}

impl MockSession {
    pub fn with(api: Arc<MockApi>) -> Self {
        Self { api: Some(api) }
    }

    pub fn broken() -> Self {
        Self { api: None }
    }
}

impl ClientSession for MockSession {
    fn partner_center_sell_v1(&self) -> SdkResult<Arc<dyn PartnerCenterSellApi>> {
        match &self.api {
            Some(api) => Ok(api.clone() as Arc<dyn PartnerCenterSellApi>),
            None => Err(SdkError::new("no credentials configured for partner center sell")),
        }
    }
}
