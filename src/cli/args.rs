//! Command-line argument parsing.

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: yurban [OPTIONS]

Options:
  -V, --version   Print version and exit
      --logout    Clear the stored session and exit
  -h, --help      Print this help and exit

Environment:
  YURBAN_API_URL   API base URL (default http://localhost:8000/api)
  YURBAN_HOME      Data directory (default ~/.yurban)
  YURBAN_LOG       Log filter (default info)
  YURBAN_LOCATION  Device position as \"lat,lon\"";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Clear the stored session
    Logout,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first recognized flag wins; unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use yurban_driver::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["yurban".to_string(), "--logout".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Logout);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        // Skip the program name
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["yurban", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["yurban", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_logout_flag() {
        assert_eq!(parse(&["yurban", "--logout"]), CliCommand::Logout);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["yurban", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["yurban"]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["yurban", "--unknown"]), CliCommand::RunTui);
    }

    #[test]
    fn test_first_flag_wins() {
        assert_eq!(parse(&["yurban", "--logout", "-V"]), CliCommand::Logout);
    }
}
