//! The `gitignore` commands: build, list, update.
//!
//! `build` resolves the effective template list (command-line names
//! completely override the configured list), assembles the document,
//! and writes it. Missing templates are per-name warnings and never
//! affect the exit code. An empty effective list is a successful no-op.

use crate::cli::GitignoreBuildArgs;
use crate::config::ProjectConfig;
use crate::error::{DevstdError, Result};
use crate::fs::atomic_write_file;
use crate::gitignore::{CacheSource, ChainSource, DirSource, TemplateSource, assemble};
use std::path::PathBuf;

/// Default output filename for assembled documents.
const DEFAULT_OUTPUT: &str = ".gitignore";

/// Run the `gitignore build` command.
pub fn cmd_build(args: GitignoreBuildArgs) -> Result<()> {
    let config = load_config()?;
    let names = effective_templates(&args.templates, &config);

    if names.is_empty() {
        println!("No gitignore templates specified in config or via arguments.");
        return Ok(());
    }

    let source = template_source(&config);
    let assembly = assemble(&names, &source);

    for name in &assembly.missing {
        eprintln!("Warning: template not found: {}", name);
    }

    // All names missing: nothing to build, and no empty file to write.
    if assembly.text.is_empty() {
        println!("No template content resolved; nothing written.");
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    atomic_write_file(&output, &assembly.text)?;

    let resolved = names
        .iter()
        .filter(|name| !assembly.missing.contains(name.as_str()))
        .count();
    println!("Wrote {} ({} template(s))", output.display(), resolved);

    Ok(())
}

/// Run the `gitignore list` command.
pub fn cmd_list() -> Result<()> {
    let config = load_config()?;
    let names = template_source(&config).list_templates();

    if names.is_empty() {
        println!("No templates available.");
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }

    Ok(())
}

/// Run the `gitignore update` command.
///
/// Cache refresh failures are warnings, never exit-code failures.
pub fn cmd_update() -> Result<()> {
    let config = load_config()?;
    let cache = CacheSource::new(config.cache_dir());

    if cache.update_cache() {
        println!("Template cache refreshed: {}", config.cache_dir().display());
        if let Some(updated_at) = cache.last_updated() {
            println!("Last updated: {}", updated_at.to_rfc3339());
        }
    } else {
        eprintln!(
            "Warning: failed to refresh template cache: {}",
            config.cache_dir().display()
        );
    }

    Ok(())
}

/// Load the nearest project config, defaulting to empty when absent.
fn load_config() -> Result<ProjectConfig> {
    let cwd = std::env::current_dir()
        .map_err(|e| DevstdError::UserError(format!("failed to resolve current directory: {}", e)))?;
    ProjectConfig::load_or_default(&cwd)
}

/// Resolve the effective template list.
///
/// Command-line names completely override the configured list. A single
/// space-delimited argument is split into multiple names.
fn effective_templates(cli_templates: &[String], config: &ProjectConfig) -> Vec<String> {
    if !cli_templates.is_empty() {
        cli_templates
            .iter()
            .flat_map(|arg| arg.split_whitespace())
            .map(str::to_string)
            .collect()
    } else {
        config.templates().to_vec()
    }
}

/// Build the template resolver chain from configuration: the local
/// templates directory (current directory when unconfigured), then the
/// on-disk cache.
fn template_source(config: &ProjectConfig) -> ChainSource {
    let templates_dir = config
        .templates_path()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    ChainSource::new(vec![
        Box::new(DirSource::new(templates_dir)),
        Box::new(CacheSource::new(config.cache_dir())),
    ])
}
