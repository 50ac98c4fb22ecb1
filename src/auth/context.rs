//! The explicit session context.
//!
//! One `SessionContext` is created at startup and shared (behind an `Arc`)
//! by the API client, the profile cache and the views. It owns the session
//! store and the in-memory session; nothing else keeps auth state.

use tokio::sync::RwLock;

use super::claims::Session;
use super::gate::{authorize, Authorization};
use super::session_store::SessionStore;
use crate::error::StorageError;

/// Owner of the current session.
#[derive(Debug)]
pub struct SessionContext {
    store: SessionStore,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    /// A context with no active session.
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Re-admit a persisted session at startup.
    ///
    /// The stored role (or the token's role claim) must be `Driver` and the
    /// token must not be expired. A rejected session is cleared.
    pub async fn restore(&self) -> Option<Session> {
        let token = self.store.load().await?;
        let session = Session::new(token);

        let role = match self.store.load_role().await {
            Some(role) => Some(role),
            None => session.claims.role.clone(),
        };
        let admitted = authorize(role.as_deref()).is_authorized();

        if !admitted || session.is_expired() {
            tracing::info!(
                admitted,
                expired = session.is_expired(),
                "Discarding stored session"
            );
            if let Err(e) = self.dispose().await {
                tracing::warn!(error = %e, "Failed to clear rejected session");
            }
            return None;
        }

        tracing::info!(subject = ?session.claims.subject, "Restored session");
        *self.current.write().await = Some(session.clone());
        Some(session)
    }

    /// Start a session after login: persist the token (and role), then make
    /// it current. Returns the gate decision for `role`.
    pub async fn init(
        &self,
        session: Session,
        role: Option<&str>,
    ) -> Result<Authorization, StorageError> {
        self.store.save(&session.token).await?;
        if let Some(role) = role {
            self.store.save_role(role).await?;
        }
        *self.current.write().await = Some(session);
        Ok(authorize(role))
    }

    /// The current session, if any.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// The bearer token of the current session.
    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Tear the session down: forget it in memory and clear every stored
    /// key. The in-memory session is dropped even if storage fails.
    pub async fn dispose(&self) -> Result<(), StorageError> {
        *self.current.write().await = None;
        self.store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::auth::claims::make_jwt;
    use crate::auth::keys;
    use serde_json::json;
    use std::sync::Arc;

    fn context_with(backing: &InMemoryStore) -> SessionContext {
        SessionContext::new(SessionStore::new(Arc::new(backing.clone())))
    }

    #[tokio::test]
    async fn test_init_persists_and_sets_current() {
        let backing = InMemoryStore::new();
        let ctx = context_with(&backing);

        let outcome = ctx.init(Session::new("tok"), Some("Driver")).await.unwrap();
        assert!(outcome.is_authorized());
        assert_eq!(ctx.token().await, Some("tok".to_string()));
        assert_eq!(backing.peek(keys::SESSION_TOKEN), Some("tok".to_string()));
        assert_eq!(backing.peek(keys::ROLE), Some("Driver".to_string()));
    }

    #[tokio::test]
    async fn test_init_persists_token_even_when_denied() {
        let backing = InMemoryStore::new();
        let ctx = context_with(&backing);

        let outcome = ctx.init(Session::new("tok"), Some("Customer")).await.unwrap();
        assert!(!outcome.is_authorized());
        assert_eq!(backing.peek(keys::SESSION_TOKEN), Some("tok".to_string()));
    }

    #[tokio::test]
    async fn test_restore_admits_stored_driver() {
        let backing = InMemoryStore::with_values([
            (keys::SESSION_TOKEN, "tok"),
            (keys::ROLE, "Driver"),
        ]);
        let ctx = context_with(&backing);

        let session = ctx.restore().await.unwrap();
        assert_eq!(session.token, "tok");
        assert!(ctx.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_falls_back_to_claims_role() {
        let token = make_jwt(json!({"role": "Driver", "exp": 4102444800i64}));
        let backing = InMemoryStore::with_values([(keys::SESSION_TOKEN, token.as_str())]);
        let ctx = context_with(&backing);

        assert!(ctx.restore().await.is_some());
    }

    #[tokio::test]
    async fn test_restore_rejects_non_driver_and_clears() {
        let backing = InMemoryStore::with_values([
            (keys::SESSION_TOKEN, "tok"),
            (keys::ROLE, "Customer"),
        ]);
        let ctx = context_with(&backing);

        assert!(ctx.restore().await.is_none());
        assert!(!ctx.is_authenticated().await);
        assert!(backing.keys().is_empty());
    }

    #[tokio::test]
    async fn test_restore_rejects_expired_token() {
        let token = make_jwt(json!({"role": "Driver", "exp": 1}));
        let backing = InMemoryStore::with_values([(keys::SESSION_TOKEN, token.as_str())]);
        let ctx = context_with(&backing);

        assert!(ctx.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_restore_without_token() {
        let ctx = context_with(&InMemoryStore::new());
        assert!(ctx.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_dispose_clears_memory_even_if_storage_fails() {
        let backing = InMemoryStore::new();
        let ctx = context_with(&backing);
        ctx.init(Session::new("tok"), Some("Driver")).await.unwrap();

        backing.set_fail_writes(true);
        assert!(ctx.dispose().await.is_err());
        assert_eq!(ctx.current().await, None);
    }
}
