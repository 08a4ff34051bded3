//! Platform-specific functionality and error handling.
//!
//! This module provides platform abstractions for argument parsing
//! and startup error reporting.

/// Handle application startup errors.
///
/// Prints to stderr and exits with code 1.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error starting Kerf:");
    eprintln!("{error}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse CLI arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
