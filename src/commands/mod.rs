//! Command implementations for devstd.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Dispatch is an explicit match over the command enum;
//! handlers return `Result<()>` and `main` maps errors to exit codes.

mod check;
mod gitignore_cmd;

use crate::cli::{Command, GitignoreAction, GitignoreCommand};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::ConfigCheck(args) => check::cmd_config_check(args),
        Command::Gitignore(cmd) => dispatch_gitignore(cmd),
    }
}

/// Dispatch gitignore subcommands.
fn dispatch_gitignore(cmd: GitignoreCommand) -> Result<()> {
    match cmd.action {
        GitignoreAction::Build(args) => gitignore_cmd::cmd_build(args),
        GitignoreAction::List => gitignore_cmd::cmd_list(),
        GitignoreAction::Update => gitignore_cmd::cmd_update(),
    }
}
