//! Service wiring.
//!
//! Builds the session context, API client, caches and ride/status/location
//! services once, from either production adapters or injected ones.

use std::sync::Arc;

use crate::adapters::{ConfiguredLocation, FileStore, ReqwestHttpClient};
use crate::api::ApiClient;
use crate::auth::{SessionContext, SessionStore};
use crate::cache::ProfileCache;
use crate::location::LocationProvider;
use crate::rides::RideService;
use crate::status::StatusService;
use crate::traits::{HttpClient, KeyValueStore, LocationSource};

use super::config::AppConfig;

/// Every long-lived service the views use.
#[derive(Debug, Clone)]
pub struct Services {
    pub session: Arc<SessionContext>,
    pub api: ApiClient,
    pub profile: Arc<ProfileCache>,
    pub status: Arc<StatusService>,
    pub rides: RideService,
    pub location: LocationProvider,
}

impl Services {
    /// Wire services over the given adapters.
    pub fn new(
        api_url: &str,
        http: Arc<dyn HttpClient>,
        store: Arc<dyn KeyValueStore>,
        location: Arc<dyn LocationSource>,
    ) -> Self {
        let session = Arc::new(SessionContext::new(SessionStore::new(store)));
        let api = ApiClient::new(api_url, http, Arc::clone(&session));
        let profile = Arc::new(ProfileCache::new(api.clone()));
        let status = Arc::new(StatusService::new(api.clone(), Arc::clone(&profile)));
        let rides = RideService::new(api.clone());
        Self {
            session,
            api,
            profile,
            status,
            rides,
            location: LocationProvider::new(location),
        }
    }

    /// Production wiring: reqwest, the JSON file store and the configured
    /// location source.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.api_url,
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(FileStore::with_path(config.store_path())),
            Arc::new(ConfiguredLocation::new(config.location)),
        )
    }

    /// Sign out: clear the session and every cached value.
    pub async fn logout(&self) -> Result<(), crate::error::StorageError> {
        let result = self.profile.end_session().await;
        self.status.reset();
        tracing::info!(ok = result.is_ok(), "Signed out");
        result
    }
}
