//! The `config-check` command.
//!
//! Resolves which pyproject.toml files to check, runs the conformance
//! validator per file, and reports deviations. Files are processed
//! strictly sequentially; a failure on one file never aborts the rest.
//!
//! Exit policy: nonzero iff at least one checked file produced errors,
//! produced warnings under `--strict`, was missing, or no input file
//! could be found at all.

use crate::cli::ConfigCheckArgs;
use crate::error::{DevstdError, Result};
use crate::standards;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Expected filename for checked configuration files.
const PYPROJECT_FILE_NAME: &str = "pyproject.toml";

/// Run the `config-check` command.
pub fn cmd_config_check(args: ConfigCheckArgs) -> Result<()> {
    let files = resolve_files(&args.files)?;

    let mut all_valid = true;

    for path in &files {
        // Only pyproject.toml files are eligible; anything else is
        // skipped silently and counts neither way.
        if path.file_name() != Some(OsStr::new(PYPROJECT_FILE_NAME)) {
            continue;
        }

        if !path.exists() {
            eprintln!("File not found: {}", path.display());
            all_valid = false;
            continue;
        }

        println!("Checking {}...", path.display());
        let result = standards::check_file(path);

        if !result.errors.is_empty() {
            eprintln!("{} error(s) found:", result.errors.len());
            for error in &result.errors {
                eprintln!("  - {}", error);
            }
            all_valid = false;
            continue;
        }

        if !result.warnings.is_empty() {
            eprintln!("{} warning(s):", result.warnings.len());
            for warning in &result.warnings {
                eprintln!("  - {}", warning);
            }
            if args.strict {
                all_valid = false;
                continue;
            }
        }

        println!("Configuration valid");
    }

    if !all_valid {
        return Err(DevstdError::CheckFailed(
            "configuration does not match the canonical standards".to_string(),
        ));
    }

    Ok(())
}

/// Resolve the files to check: explicit arguments if given, otherwise
/// `./pyproject.toml` if it exists.
fn resolve_files(files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }

    let default = Path::new(PYPROJECT_FILE_NAME);
    if default.exists() {
        Ok(vec![default.to_path_buf()])
    } else {
        Err(DevstdError::UserError(
            "No pyproject.toml found in current directory".to_string(),
        ))
    }
}
