//! Durable key/value storage trait abstraction.
//!
//! The session store persists a handful of string keys (token, cached
//! profile, identity fields). This trait is the seam between it and the
//! device storage, so tests can run against an in-memory map.

use async_trait::async_trait;

use crate::error::StorageError;

/// Trait for durable string key/value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a key. Missing keys are `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove several keys at once. Keys that are not present are ignored.
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;
}
