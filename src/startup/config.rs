//! Runtime configuration.
//!
//! Read once at startup from `YURBAN_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `YURBAN_API_URL` | `http://localhost:8000/api` | API base URL |
//! | `YURBAN_HOME` | `~/.yurban` | data dir (session store, log file) |
//! | `YURBAN_LOG` | `info` | tracing filter directives |
//! | `YURBAN_LOCATION` | unset | device position as `lat,lon` |

use std::path::{Path, PathBuf};

use crate::adapters::file_store::STORE_FILE;
use crate::api::DEFAULT_API_URL;
use crate::error::ConfigError;
use crate::models::Coordinates;

pub const ENV_API_URL: &str = "YURBAN_API_URL";
pub const ENV_HOME: &str = "YURBAN_HOME";
pub const ENV_LOG: &str = "YURBAN_LOG";
pub const ENV_LOCATION: &str = "YURBAN_LOCATION";

/// Data dir name under the home directory.
const DATA_DIR: &str = ".yurban";

/// Log file name inside the data dir.
pub const LOG_FILE: &str = "yurban.log";

/// Configuration for the driver client.
///
/// # Example
///
/// ```ignore
/// use yurban_driver::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("https://api.yurban.example/api")
///     .with_log_filter("debug");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API base URL
    pub api_url: String,
    /// Directory holding the session store and the log file
    pub data_dir: PathBuf,
    /// `EnvFilter` directives
    pub log_filter: String,
    /// Configured device position; `None` means permission denied
    pub location: Option<Coordinates>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: dirs::home_dir()
                .map(|home| home.join(DATA_DIR))
                .unwrap_or_else(|| PathBuf::from(DATA_DIR)),
            log_filter: "info".to_string(),
            location: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_location(mut self, location: Option<Coordinates>) -> Self {
        self.location = location;
        self
    }

    /// Path of the session store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.api_url = parse_api_url(&url)?;
        }
        if let Some(home) = get(ENV_HOME) {
            config.data_dir = expand_home(&home);
        }
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(raw) = get(ENV_LOCATION) {
            config.location = Some(parse_location(&raw)?);
        }

        Ok(config)
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError {
            key: ENV_API_URL,
            value: raw.to_string(),
            reason: "must start with http:// or https://".to_string(),
        })
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => Path::new(raw).to_path_buf(),
    }
}

/// Parse `lat,lon` in decimal degrees.
pub fn parse_location(raw: &str) -> Result<Coordinates, ConfigError> {
    let invalid = |reason: &str| ConfigError {
        key: ENV_LOCATION,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| invalid("expected \"lat,lon\""))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| invalid("latitude is not a number"))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| invalid("longitude is not a number"))?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(invalid("latitude must be between -90 and 90"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(invalid("longitude must be between -180 and 180"));
    }
    Ok(Coordinates::new(latitude, longitude))
}
