//! CLI module for the Yurban driver client.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use yurban_driver::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config).await {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod logout;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use logout::handle_logout_command;
pub use version::{version_string, VERSION};

use color_eyre::Result;

use crate::startup::AppConfig;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub async fn run_cli_command(command: CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Logout => Some(handle_logout_command(config).await),
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_tui_returns_none() {
        let result = run_cli_command(CliCommand::RunTui, &AppConfig::default()).await;
        assert!(result.is_none());
    }
}
