//! Devstd: project-standards CLI.
//!
//! This is the main entry point for the `devstd` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.
//!
//! Two independent subcommands are provided:
//! - `config-check`: validate `pyproject.toml` files against the canonical
//!   configuration standards
//! - `gitignore`: assemble, list, and refresh `.gitignore` templates

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod gitignore;
pub mod standards;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
