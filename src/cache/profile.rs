//! Read-through cache for the signed-in driver's profile.
//!
//! Lookup order is memory, then the persisted `user_profile` snapshot, then
//! `GET /profile`. Mutations never patch the cached value; they call
//! [`ProfileCache::invalidate`] and the next read goes to the server.

use tokio::sync::RwLock;

use crate::api::ApiClient;
use crate::error::{AppError, AuthError, StorageError};
use crate::models::Driver;

/// Fetches retried when the cache is invalidated while a request is out.
const FETCH_ATTEMPTS: usize = 3;

/// The cached value plus a counter bumped on every invalidation.
///
/// A fetch only commits if the counter is unchanged since it started.
#[derive(Debug, Default)]
struct Slot {
    driver: Option<Driver>,
    generation: u64,
}

/// Cache around the "current driver" resource.
#[derive(Debug)]
pub struct ProfileCache {
    api: ApiClient,
    memory: RwLock<Slot>,
}

impl ProfileCache {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            memory: RwLock::new(Slot::default()),
        }
    }

    /// The current driver's profile.
    ///
    /// Fails with [`AuthError::NotAuthenticated`] when there is no session.
    pub async fn get(&self) -> Result<Driver, AppError> {
        let session = self.api.session();
        if !session.is_authenticated().await {
            return Err(AuthError::NotAuthenticated.into());
        }

        let generation = {
            let slot = self.memory.read().await;
            if let Some(driver) = &slot.driver {
                return Ok(driver.clone());
            }
            slot.generation
        };

        if let Some(driver) = session.store().load_profile().await {
            let mut slot = self.memory.write().await;
            if slot.generation == generation {
                tracing::debug!("Profile served from stored snapshot");
                slot.driver = Some(driver.clone());
                return Ok(driver);
            }
        }

        self.fetch().await
    }

    /// Bypass every cached layer and fetch from the server.
    pub async fn refresh(&self) -> Result<Driver, AppError> {
        self.invalidate().await;
        self.get().await
    }

    /// In-memory value only, without any I/O.
    pub async fn peek(&self) -> Option<Driver> {
        self.memory.read().await.driver.clone()
    }

    /// Drop the in-memory value and the persisted snapshot.
    ///
    /// Fetches still in flight are discarded when they complete.
    pub async fn invalidate(&self) {
        {
            let mut slot = self.memory.write().await;
            slot.generation += 1;
            slot.driver = None;
        }
        if let Err(e) = self.api.session().store().remove_profile().await {
            tracing::warn!(error = %e, "Failed to remove profile snapshot");
        }
    }

    /// Invalidate and dispose of the session as one step.
    ///
    /// No in-flight fetch can write the old driver back afterwards.
    pub async fn end_session(&self) -> Result<(), StorageError> {
        let mut slot = self.memory.write().await;
        slot.generation += 1;
        slot.driver = None;
        self.api.session().dispose().await
    }

    async fn fetch(&self) -> Result<Driver, AppError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let generation = self.memory.read().await.generation;
            let driver = self.api.fetch_profile().await?;

            let mut slot = self.memory.write().await;
            if slot.generation == generation {
                tracing::debug!(status = %driver.status, "Profile fetched");
                let store = self.api.session().store();
                if let Err(e) = store.save_profile(&driver).await {
                    tracing::warn!(error = %e, "Failed to persist profile snapshot");
                }
                if let Err(e) = store.save_identity(&driver).await {
                    tracing::warn!(error = %e, "Failed to persist identity fields");
                }
                slot.driver = Some(driver.clone());
                return Ok(driver);
            }
            drop(slot);

            if !self.api.session().is_authenticated().await {
                tracing::debug!("Session ended during profile fetch, discarding result");
                return Err(AuthError::NotAuthenticated.into());
            }
            if attempt >= FETCH_ATTEMPTS {
                tracing::warn!("Profile kept changing during fetch, returning uncached result");
                return Ok(driver);
            }
            tracing::debug!(attempt, "Profile invalidated during fetch, refetching");
        }
    }
}
