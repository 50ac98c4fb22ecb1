//! Status toggle wired to the API.

use std::sync::{Arc, Mutex};

use crate::api::ApiClient;
use crate::cache::ProfileCache;
use crate::error::AppError;
use crate::models::DriverStatus;

use super::toggle::{StatusPhase, StatusToggle};

/// Owns the toggle state and performs the update requests.
#[derive(Debug)]
pub struct StatusService {
    api: ApiClient,
    profile: Arc<ProfileCache>,
    state: Mutex<StatusToggle>,
}

impl StatusService {
    pub fn new(api: ApiClient, profile: Arc<ProfileCache>) -> Self {
        Self {
            api,
            profile,
            state: Mutex::new(StatusToggle::default()),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut StatusToggle) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    pub fn phase(&self) -> StatusPhase {
        self.with_state(|s| s.phase())
    }

    pub fn confirmed(&self) -> DriverStatus {
        self.with_state(|s| s.confirmed())
    }

    /// Adopt the status from a freshly loaded profile.
    pub fn sync(&self, status: DriverStatus) {
        self.with_state(|s| s.sync(status));
    }

    /// Forget the status entirely, e.g. on sign-out.
    pub fn reset(&self) {
        self.with_state(|s| *s = StatusToggle::default());
    }

    /// Flip Online/Offline.
    ///
    /// Refused with [`StatusError::InFlight`](crate::error::StatusError)
    /// while a previous toggle is outstanding. On success the returned
    /// status is the server-confirmed one and the profile cache has been
    /// invalidated. On failure the prior status is kept; nothing is retried.
    pub async fn toggle(&self) -> Result<DriverStatus, AppError> {
        let target = self.with_state(|s| s.begin())?;
        tracing::info!(%target, "Updating driver status");

        match self.api.update_status(target).await {
            Ok(reported) => {
                self.profile.invalidate().await;
                let confirmed = match reported {
                    Some(status) => status,
                    None => match self.profile.get().await {
                        Ok(driver) => driver.status,
                        Err(e) => {
                            tracing::warn!(error = %e, "Status re-fetch failed, assuming requested target");
                            target
                        }
                    },
                };
                self.with_state(|s| s.settle_success(confirmed));
                tracing::info!(status = %confirmed, "Driver status confirmed");
                Ok(confirmed)
            }
            Err(e) => {
                self.with_state(|s| s.settle_failure());
                tracing::warn!(%target, error = %e, "Driver status update failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::adapters::InMemoryStore;
    use crate::auth::{Session, SessionContext, SessionStore};
    use crate::error::StatusError;
    use crate::traits::HttpMethod;
    use serde_json::json;
    use std::time::Duration;

    const BASE: &str = "http://api.test";

    async fn setup() -> (Arc<StatusService>, MockHttpClient) {
        let http = MockHttpClient::new();
        let session = Arc::new(SessionContext::new(SessionStore::new(Arc::new(
            InMemoryStore::new(),
        ))));
        session
            .init(Session::new("tok"), Some("Driver"))
            .await
            .unwrap();
        let api = ApiClient::new(BASE, Arc::new(http.clone()), session);
        let profile = Arc::new(ProfileCache::new(api.clone()));
        (Arc::new(StatusService::new(api, profile)), http)
    }

    #[tokio::test]
    async fn test_toggle_uses_status_from_response() {
        let (service, http) = setup().await;
        http.set_response_for(
            HttpMethod::Patch,
            &format!("{BASE}/auth/update-status"),
            MockResponse::json(200, json!({"user": {"status": "Online"}})),
        );

        assert_eq!(service.toggle().await.unwrap(), DriverStatus::Online);
        assert_eq!(service.phase(), StatusPhase::Online);
        assert!(http.requests_to(HttpMethod::Get, "/profile").is_empty());
    }

    #[tokio::test]
    async fn test_toggle_refetches_when_response_has_no_status() {
        let (service, http) = setup().await;
        http.set_response_for(
            HttpMethod::Patch,
            &format!("{BASE}/auth/update-status"),
            MockResponse::json(200, json!({"message": "ok"})),
        );
        http.set_response_for(
            HttpMethod::Get,
            &format!("{BASE}/profile"),
            MockResponse::json(200, json!({"user": {"status": "Offline"}})),
        );

        // Server says the driver is still offline
        assert_eq!(service.toggle().await.unwrap(), DriverStatus::Offline);
        assert_eq!(http.requests_to(HttpMethod::Get, "/profile").len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_falls_back_to_target() {
        let (service, http) = setup().await;
        http.set_response_for(
            HttpMethod::Patch,
            &format!("{BASE}/auth/update-status"),
            MockResponse::json(200, json!({})),
        );
        http.set_response_for(
            HttpMethod::Get,
            &format!("{BASE}/profile"),
            MockResponse::json(500, json!({})),
        );

        assert_eq!(service.toggle().await.unwrap(), DriverStatus::Online);
    }

    #[tokio::test]
    async fn test_failure_reverts() {
        let (service, http) = setup().await;
        service.sync(DriverStatus::Online);
        http.set_default_response(MockResponse::json(500, json!({"message": "nope"})));

        let err = service.toggle().await.unwrap_err();
        assert_eq!(err.user_message(), "nope");
        assert_eq!(service.phase(), StatusPhase::Online);
    }

    #[tokio::test]
    async fn test_second_toggle_refused_while_pending() {
        let (service, http) = setup().await;
        http.set_default_response(MockResponse::json(200, json!({"status": "Online"})));
        http.set_delay(Duration::from_millis(100));

        let first = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.toggle().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(matches!(service.phase(), StatusPhase::Transitioning { .. }));

        let second = service.toggle().await;
        assert_eq!(second, Err(AppError::Status(StatusError::InFlight)));

        assert_eq!(first.await.unwrap().unwrap(), DriverStatus::Online);
        assert_eq!(
            http.requests_to(HttpMethod::Patch, "/auth/update-status").len(),
            1
        );
    }

    #[tokio::test]
    async fn test_reset_forgets_previous_status() {
        let (service, _http) = setup().await;
        service.sync(DriverStatus::Online);

        service.reset();
        assert_eq!(service.phase(), StatusPhase::Offline);
        assert_eq!(service.confirmed(), DriverStatus::Offline);
    }
}
