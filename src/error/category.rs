//! Error category classification for unified error handling.
//!
//! Categories drive how an error is presented: which notification text is
//! shown and whether the screen offers a manual "Retry" affordance.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No response from the server (connection refused, DNS, timeout).
    Network,

    /// Authentication/authorization problems (bad credentials, no session,
    /// wrong role).
    Auth,

    /// The server answered with an error status.
    Server,

    /// Invalid local state (a transition the client must not attempt).
    Client,

    /// User action required (missing form fields, denied permission).
    User,

    /// Local storage or filesystem errors.
    System,

    /// Configuration errors (bad environment values).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if a manual retry of the same operation can succeed
    /// without the user changing anything.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Try signing out and signing back in",
            ErrorCategory::Server => {
                "The server may be experiencing issues. Please try again later"
            }
            ErrorCategory::Client => "This action is not available for this ride",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your YURBAN_* environment settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
