//! JSON-file key/value storage.
//!
//! All keys live in a single `session.json` object under the data dir.
//! A missing, unreadable or corrupt file behaves like an empty store, so a
//! damaged session simply means the driver signs in again.
//!
//! File I/O runs on the blocking pool. Writes go to a sibling temp file that
//! is renamed over `session.json`, so an interrupted write never truncates it.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// The store file name inside the data dir.
pub const STORE_FILE: &str = "session.json";

type Entries = BTreeMap<String, String>;

/// Key/value store persisted as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<StoreFile>,
}

#[derive(Debug)]
struct StoreFile {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    /// Store at `<data_dir>/session.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::with_path(data_dir.join(STORE_FILE))
    }

    /// Store at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            inner: Arc::new(StoreFile {
                path,
                lock: Mutex::new(()),
            }),
        }
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Run `op` on the blocking pool while holding the file lock.
    async fn with_file<T, F>(&self, op: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&StoreFile) -> Result<T, StorageError> + Send + 'static,
    {
        let file = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let _guard = file.lock.lock().unwrap_or_else(|e| e.into_inner());
            op(file.as_ref())
        })
        .await
        .map_err(|e| StorageError::Io {
            path: self.inner.path.clone(),
            message: e.to_string(),
        })?
    }
}

impl StoreFile {
    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn read_entries(&self) -> Entries {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Entries::new(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session store");
                Entries::new()
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, &e))?;
            }
        }

        let temp = self.temp_path();
        let file = File::create(&temp).map_err(|e| StorageError::io(&temp, &e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        let file = writer
            .into_inner()
            .map_err(|e| StorageError::io(&temp, e.error()))?;
        file.sync_all().map_err(|e| StorageError::io(&temp, &e))?;

        fs::rename(&temp, &self.path).map_err(|e| StorageError::io(&self.path, &e))
    }

    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        let mut entries = self.read_entries();
        if !apply(&mut entries) {
            return Ok(());
        }
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::io(&self.path, &e)),
            };
        }
        self.write_entries(&entries)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = key.to_string();
        self.with_file(move |file| Ok(file.read_entries().remove(&key)))
            .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let (key, value) = (key.to_string(), value.to_string());
        self.with_file(move |file| {
            file.update(|entries| {
                entries.insert(key, value);
                true
            })
        })
        .await
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        self.with_file(move |file| {
            file.update(|entries| {
                let before = entries.len();
                entries.retain(|k, _| !keys.contains(k));
                entries.len() != before
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(temp_dir.path());
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_get_missing_file_is_none() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.get("session_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_and_get_round_trip_through_disk() {
        let (store, temp) = create_test_store();
        store.set("session_token", "abc").await.unwrap();
        store.set("role", "Driver").await.unwrap();

        let reopened = FileStore::in_dir(temp.path());
        assert_eq!(
            reopened.get("session_token").await.unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(reopened.get("role").await.unwrap(), Some("Driver".to_string()));
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directory() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::in_dir(&temp.path().join("nested").join("dir"));
        store.set("k", "v").await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_as_empty() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.get("session_token").await.unwrap(), None);

        store.set("session_token", "fresh").await.unwrap();
        assert_eq!(
            store.get("session_token").await.unwrap(),
            Some("fresh".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_many_tolerates_missing_keys() {
        let (store, _temp) = create_test_store();
        store.remove_many(&["a", "b"]).await.unwrap();

        store.set("a", "1").await.unwrap();
        store.set("c", "3").await.unwrap();
        store.remove_many(&["a", "b"]).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("c").await.unwrap(), Some("3".to_string()));
    }

    #[tokio::test]
    async fn test_removing_last_key_deletes_file() {
        let (store, _temp) = create_test_store();
        store.set("a", "1").await.unwrap();
        store.remove_many(&["a"]).await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_file() {
        let (store, temp) = create_test_store();
        store.set("session_token", "abc").await.unwrap();
        store.set("role", "Driver").await.unwrap();

        assert!(!temp.path().join("session.json.tmp").exists());
        let raw = fs::read_to_string(store.path()).unwrap();
        let entries: Entries = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_temp_file_is_ignored_and_replaced() {
        let (store, temp) = create_test_store();
        store.set("session_token", "abc").await.unwrap();
        fs::write(temp.path().join("session.json.tmp"), "{ half written").unwrap();

        assert_eq!(
            store.get("session_token").await.unwrap(),
            Some("abc".to_string())
        );
        store.set("role", "Driver").await.unwrap();
        assert!(!temp.path().join("session.json.tmp").exists());
        assert_eq!(store.get("role").await.unwrap(), Some("Driver".to_string()));
    }

    #[tokio::test]
    async fn test_concurrent_sets_keep_every_key() {
        let (store, _temp) = create_test_store();
        let writes = (0..8).map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.set(&format!("k{}", i), "v").await })
        });
        for handle in futures::future::join_all(writes).await {
            handle.unwrap().unwrap();
        }
        for i in 0..8 {
            assert_eq!(store.get(&format!("k{}", i)).await.unwrap(), Some("v".to_string()));
        }
    }
}
