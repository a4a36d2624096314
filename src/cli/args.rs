//! Command-line argument parsing.

use std::net::SocketAddr;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the web server, optionally overriding the bind address
    Serve { bind: Option<SocketAddr> },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use tutor::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["tutor".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut bind = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--bind" | "-b" => match args.next() {
                Some(value) => match parse_addr(&value) {
                    Ok(addr) => bind = Some(addr),
                    Err(msg) => return CliCommand::Invalid(msg),
                },
                None => return CliCommand::Invalid("--bind requires an address".to_string()),
            },
            other => {
                if let Some(value) = other.strip_prefix("--bind=") {
                    match parse_addr(value) {
                        Ok(addr) => bind = Some(addr),
                        Err(msg) => return CliCommand::Invalid(msg),
                    }
                }
            }
        }
    }

    CliCommand::Serve { bind }
}

fn parse_addr(value: &str) -> Result<SocketAddr, String> {
    value
        .parse()
        .map_err(|_| format!("invalid bind address: {}", value))
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: tutor [OPTIONS]

Serves the Tutor web app.

Options:
  -b, --bind <ADDR>  Address to listen on (default: TUTOR_BIND or 127.0.0.1:8501)
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  OPENAI_API_KEY     API key for the chat-completion provider
  OPENAI_BASE_URL    Provider base URL (default: https://api.openai.com/v1)
  TUTOR_BIND         Listen address
  RUST_LOG           Log filter (default: tutor=info)";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["tutor", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["tutor", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["tutor", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["tutor"]), CliCommand::Serve { bind: None });
    }

    #[test]
    fn test_parse_bind() {
        let expected = CliCommand::Serve {
            bind: Some("0.0.0.0:8080".parse().unwrap()),
        };
        assert_eq!(parse(&["tutor", "--bind", "0.0.0.0:8080"]), expected);
        assert_eq!(parse(&["tutor", "--bind=0.0.0.0:8080"]), expected);
        assert_eq!(parse(&["tutor", "-b", "0.0.0.0:8080"]), expected);
    }

    #[test]
    fn test_parse_bad_bind() {
        assert_eq!(
            parse(&["tutor", "--bind", "localhost"]),
            CliCommand::Invalid("invalid bind address: localhost".to_string())
        );
        assert!(matches!(parse(&["tutor", "--bind"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["tutor", "--unknown"]), CliCommand::Serve { bind: None });
    }
}
