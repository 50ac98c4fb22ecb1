//! Durable session storage.
//!
//! Wraps a [`KeyValueStore`] with the fixed set of keys the driver app
//! persists. Reads never fail: an unreadable store is logged and treated as
//! empty, which sends the driver back to sign-in.

use std::sync::Arc;

use crate::error::StorageError;
use crate::models::Driver;
use crate::traits::KeyValueStore;

/// Persisted key names.
pub mod keys {
    pub const SESSION_TOKEN: &str = "session_token";
    pub const USER_PROFILE: &str = "user_profile";
    pub const USER_ID: &str = "user_id";
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";

    /// Every key, cleared together on logout.
    pub const ALL: [&str; 6] = [SESSION_TOKEN, USER_PROFILE, USER_ID, USERNAME, EMAIL, ROLE];
}

/// Typed access to the persisted session keys.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the bearer token.
    pub async fn save(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(keys::SESSION_TOKEN, token).await
    }

    /// The stored bearer token, if any.
    pub async fn load(&self) -> Option<String> {
        self.read(keys::SESSION_TOKEN)
            .await
            .filter(|token| !token.is_empty())
    }

    /// Remove every session key. Missing keys are not an error.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_many(&keys::ALL).await
    }

    /// Persist the role reported at login.
    pub async fn save_role(&self, role: &str) -> Result<(), StorageError> {
        self.store.set(keys::ROLE, role).await
    }

    pub async fn load_role(&self) -> Option<String> {
        self.read(keys::ROLE).await
    }

    /// Persist the serialized profile snapshot.
    pub async fn save_profile(&self, driver: &Driver) -> Result<(), StorageError> {
        let json = serde_json::to_string(driver)?;
        self.store.set(keys::USER_PROFILE, &json).await
    }

    /// The profile snapshot. A snapshot that no longer parses is ignored.
    pub async fn load_profile(&self) -> Option<Driver> {
        let raw = self.read(keys::USER_PROFILE).await?;
        match serde_json::from_str(&raw) {
            Ok(driver) => Some(driver),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable profile snapshot");
                None
            }
        }
    }

    /// Drop the profile snapshot only.
    pub async fn remove_profile(&self) -> Result<(), StorageError> {
        self.store.remove_many(&[keys::USER_PROFILE]).await
    }

    /// Persist the identity fields shown outside the profile screen.
    pub async fn save_identity(&self, driver: &Driver) -> Result<(), StorageError> {
        if let Some(id) = driver.id.as_deref() {
            self.store.set(keys::USER_ID, id).await?;
        }
        self.store.set(keys::USERNAME, &driver.full_name()).await?;
        if let Some(email) = driver.email.as_deref() {
            self.store.set(keys::EMAIL, email).await?;
        }
        Ok(())
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read session store");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::models::DriverStatus;

    fn store() -> (SessionStore, InMemoryStore) {
        let backing = InMemoryStore::new();
        (SessionStore::new(Arc::new(backing.clone())), backing)
    }

    fn driver() -> Driver {
        Driver {
            id: Some("d-1".to_string()),
            first_name: Some("Amina".to_string()),
            last_name: Some("Otieno".to_string()),
            email: Some("amina@example.com".to_string()),
            status: DriverStatus::Online,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_without_session_is_none() {
        let (store, _) = store();
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_save_and_load_token() {
        let (store, backing) = store();
        store.save("tok").await.unwrap();
        assert_eq!(store.load().await, Some("tok".to_string()));
        assert_eq!(backing.peek(keys::SESSION_TOKEN), Some("tok".to_string()));
    }

    #[tokio::test]
    async fn test_clear_removes_every_key() {
        let (store, backing) = store();
        store.save("tok").await.unwrap();
        store.save_role("Driver").await.unwrap();
        store.save_profile(&driver()).await.unwrap();
        store.save_identity(&driver()).await.unwrap();
        assert_eq!(backing.keys().len(), 6);

        store.clear().await.unwrap();
        assert!(backing.keys().is_empty());

        // Clearing again with nothing stored still succeeds
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_profile_snapshot_round_trip() {
        let (store, _) = store();
        store.save_profile(&driver()).await.unwrap();
        let loaded = store.load_profile().await.unwrap();
        assert_eq!(loaded.id.as_deref(), Some("d-1"));
        assert_eq!(loaded.status, DriverStatus::Online);
    }

    #[tokio::test]
    async fn test_corrupt_profile_snapshot_is_ignored() {
        let backing = InMemoryStore::with_values([(keys::USER_PROFILE, "not json")]);
        let store = SessionStore::new(Arc::new(backing));
        assert!(store.load_profile().await.is_none());
    }

    #[tokio::test]
    async fn test_identity_fields() {
        let (store, backing) = store();
        store.save_identity(&driver()).await.unwrap();
        assert_eq!(backing.peek(keys::USER_ID), Some("d-1".to_string()));
        assert_eq!(backing.peek(keys::USERNAME), Some("Amina Otieno".to_string()));
        assert_eq!(
            backing.peek(keys::EMAIL),
            Some("amina@example.com".to_string())
        );
    }
}
