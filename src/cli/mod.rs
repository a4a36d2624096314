//! CLI module for the tutor binary.
//!
//! ```ignore
//! use tutor::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // Otherwise start the server
//! ```

pub mod args;

pub use args::{parse_args, CliCommand, USAGE};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle commands that do not start the server.
///
/// Returns the process exit code, or `None` for [`CliCommand::Serve`].
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("tutor {}", VERSION);
            Some(0)
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(0)
        }
        CliCommand::Invalid(msg) => {
            eprintln!("Error: {}\n\n{}", msg, USAGE);
            Some(2)
        }
        CliCommand::Serve { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_returns_none() {
        assert!(run_cli_command(&CliCommand::Serve { bind: None }).is_none());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(run_cli_command(&CliCommand::Version), Some(0));
        assert_eq!(run_cli_command(&CliCommand::Help), Some(0));
        assert_eq!(
            run_cli_command(&CliCommand::Invalid("x".to_string())),
            Some(2)
        );
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }
}
