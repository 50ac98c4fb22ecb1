//! `--logout`: clear the stored session without starting the TUI.

use color_eyre::Result;
use std::sync::Arc;

use crate::adapters::FileStore;
use crate::auth::SessionStore;
use crate::startup::AppConfig;

/// Remove every stored session key.
pub async fn handle_logout_command(config: &AppConfig) -> Result<()> {
    let store = SessionStore::new(Arc::new(FileStore::with_path(config.store_path())));
    store.clear().await?;
    tracing::info!("Session cleared from command line");
    println!("Signed out.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::keys;
    use crate::traits::KeyValueStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_logout_clears_store_file() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::default().with_data_dir(temp.path());
        let file = FileStore::with_path(config.store_path());
        file.set(keys::SESSION_TOKEN, "tok").await.unwrap();

        handle_logout_command(&config).await.unwrap();
        assert_eq!(file.get(keys::SESSION_TOKEN).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_without_session_succeeds() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::default().with_data_dir(temp.path());
        handle_logout_command(&config).await.unwrap();
    }
}
