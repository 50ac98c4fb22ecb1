//! Local storage and configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Durable key/value storage failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// Could not determine the home directory for the default data dir.
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// Reading or writing the store file failed.
    #[error("Storage I/O error at {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// A stored value could not be (de)serialized.
    #[error("Storage serialization error: {message}")]
    Serialization { message: String },
}

impl StorageError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NoHomeDirectory => "E_SYS_HOME",
            StorageError::Io { .. } => "E_SYS_IO",
            StorageError::Serialization { .. } => "E_SYS_SERDE",
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for {key} ({value:?}): {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}
