#![allow(dead_code)]

//! Common test utilities for integration tests.
//!
//! Every test gets its own wiremock server and a temp data dir holding the
//! file-backed session store, wired the same way the binary wires them.
//!
//! # Example
//!
//! ```ignore
//! let env = TestEnv::start().await;
//! env.mount_json("GET", "/profile", 200, json!({"user": {}})).await;
//! env.sign_in().await;
//! ```

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yurban_driver::adapters::{ConfiguredLocation, FileStore, ReqwestHttpClient};
use yurban_driver::auth::Session;
use yurban_driver::models::Coordinates;
use yurban_driver::startup::Services;

/// Mock API plus services over a real file store.
pub struct TestEnv {
    pub server: MockServer,
    pub dir: TempDir,
    pub services: Services,
}

impl TestEnv {
    /// Location permission denied.
    pub async fn start() -> Self {
        Self::with_location(None).await
    }

    pub async fn with_location(location: Option<Coordinates>) -> Self {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let services = services_for(&server.uri(), &dir, location);
        Self {
            server,
            dir,
            services,
        }
    }

    /// A second wiring over the same server and data dir, as after a restart.
    pub fn restart(&self) -> Services {
        services_for(&self.server.uri(), &self.dir, None)
    }

    pub fn store(&self) -> FileStore {
        FileStore::in_dir(self.dir.path())
    }

    /// Initialise a driver session directly.
    pub async fn sign_in(&self) {
        self.services
            .session
            .init(Session::new(jwt(serde_json::json!({"id": "d1", "role": "Driver"}))), Some("Driver"))
            .await
            .unwrap();
    }

    /// Answer `verb path` with a JSON body.
    pub async fn mount_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

fn services_for(uri: &str, dir: &TempDir, location: Option<Coordinates>) -> Services {
    Services::new(
        uri,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(FileStore::in_dir(dir.path())),
        Arc::new(ConfiguredLocation::new(location)),
    )
}

/// An unsigned JWT carrying `payload` as its claims.
pub fn jwt(payload: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

/// A ride record as the backend returns it.
pub fn ride_json(id: &str, status: &str, requested_at: Option<&str>) -> Value {
    let mut ride = serde_json::json!({
        "_id": id,
        "customerId": {"_id": "c1", "firstName": "Wanjiru", "lastName": "Kamau", "phoneNumber": "0700000000"},
        "pickupLocation": "Kenyatta Avenue",
        "dropoffLocation": "Westlands",
        "pickupCoordinates": {"latitude": -1.2841, "longitude": 36.8233},
        "dropoffCoordinates": {"latitude": -1.2676, "longitude": 36.8108},
        "passengerNumber": 2,
        "status": status
    });
    if let Some(at) = requested_at {
        ride["requestedAt"] = Value::String(at.to_string());
    }
    ride
}
