//! CLI argument parsing for devstd.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Devstd: project-standards CLI.
///
/// Validates project configuration files against the canonical standards
/// and assembles `.gitignore` files from named template fragments:
/// - `config-check` compares `pyproject.toml` against fixed standard tables
/// - `gitignore build` concatenates templates declared in devstd.toml
#[derive(Parser, Debug)]
#[command(name = "devstd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for devstd.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate pyproject.toml configuration standardization.
    ///
    /// Checks that ruff, mypy, and pytest configurations match the
    /// canonical standards. Project metadata deviations are reported
    /// as warnings unless --strict is given.
    ConfigCheck(ConfigCheckArgs),

    /// Gitignore template commands.
    ///
    /// Build a .gitignore from templates, list available templates,
    /// or refresh the local template cache.
    Gitignore(GitignoreCommand),
}

/// Arguments for the `config-check` command.
#[derive(Parser, Debug)]
pub struct ConfigCheckArgs {
    /// pyproject.toml files to check. Defaults to ./pyproject.toml.
    pub files: Vec<PathBuf>,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Gitignore subcommands.
#[derive(Parser, Debug)]
pub struct GitignoreCommand {
    #[command(subcommand)]
    pub action: GitignoreAction,
}

/// Available gitignore actions.
#[derive(Subcommand, Debug)]
pub enum GitignoreAction {
    /// Build a .gitignore file from templates.
    ///
    /// Template names given on the command line override the list
    /// declared in devstd.toml. Sections appear in request order.
    Build(GitignoreBuildArgs),

    /// List available template names.
    ///
    /// Shows templates from the configured templates directory and
    /// the local cache, sorted and deduplicated.
    List,

    /// Refresh the local template cache.
    ///
    /// Failures are reported as warnings and never affect the exit code.
    Update,
}

/// Arguments for the `gitignore build` command.
#[derive(Parser, Debug)]
pub struct GitignoreBuildArgs {
    /// Template names to include. A single space-delimited argument is
    /// split into multiple names.
    pub templates: Vec<String>,

    /// Output path. Defaults to ./.gitignore.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
