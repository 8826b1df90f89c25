//! CLI module for the Fax-lang code generator
//!
//! ## Usage
//!
//! - `faxc <AST_FILE>` - generate C++ and print it
//! - `faxc <AST_FILE> -o out.cpp` - write to a file instead
//! - `faxc <AST_FILE> --check` - validate only, print nothing
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use faxc_core::lang::conventions::DEFAULT_APP_NAMESPACE;

use crate::config::CodegenConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Fax-lang code generator: JSON AST to C++
#[derive(Parser, Debug)]
#[command(name = "faxc")]
#[command(version = VERSION)]
#[command(about = "Generate C++ from a Fax-lang JSON AST", long_about = None)]
pub struct Cli {
    /// JSON AST document produced by the Fax-lang parser
    #[arg(value_name = "AST_FILE")]
    pub file: PathBuf,

    /// Write the generated C++ to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Namespace wrapping the program's declarations
    #[arg(long, value_name = "NAME", default_value = DEFAULT_APP_NAMESPACE)]
    pub namespace: String,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub indent_width: usize,

    /// Omit the leading banner comment
    #[arg(long)]
    pub no_banner: bool,

    /// Omit `/** @brief ... */` lines above functions
    #[arg(long)]
    pub no_doc_comments: bool,

    /// Decode and generate, but print nothing
    #[arg(long, conflicts_with = "output")]
    pub check: bool,
}

impl Cli {
    /// Build the codegen configuration from the flags.
    pub fn config(&self) -> CodegenConfig {
        CodegenConfig::new()
            .with_indent_width(self.indent_width)
            .with_namespace(self.namespace.clone())
            .with_banner(!self.no_banner)
            .with_doc_comments(!self.no_doc_comments)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    commands::validate_namespace(&cli.namespace)?;
    let config = cli.config();

    if cli.check {
        commands::check_file(&cli.file, config)
    } else {
        commands::emit_cpp(&cli.file, cli.output.as_deref(), config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["faxc", "prog.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("prog.json"));
        assert!(cli.output.is_none());
        assert!(!cli.check);
        assert_eq!(cli.config(), CodegenConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "faxc",
            "prog.json",
            "--namespace",
            "demo",
            "--indent-width",
            "2",
            "--no-banner",
            "--no-doc-comments",
            "-o",
            "out.cpp",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.cpp")));
        let config = cli.config();
        assert_eq!(config.namespace, "demo");
        assert_eq!(config.indent_width, 2);
        assert!(!config.emit_banner);
        assert!(!config.emit_doc_comments);
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        assert!(Cli::try_parse_from(["faxc"]).is_err());
    }

    #[test]
    fn test_check_conflicts_with_output() {
        assert!(Cli::try_parse_from(["faxc", "prog.json", "--check", "-o", "x.cpp"]).is_err());
    }

    #[test]
    fn test_execute_rejects_reserved_namespace() {
        let cli = Cli::try_parse_from(["faxc", "prog.json", "--namespace", "class"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("reserved word"));
    }

    #[test]
    fn test_cli_error_display() {
        let err = CliError::failure("boom");
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.exit_code, ExitCode(1));
    }
}
