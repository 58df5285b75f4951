//! Config struct definitions and defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default cache directory for gitignore templates, relative to the
/// current directory.
pub(crate) const DEFAULT_CACHE_DIR: &str = ".devstd/templates";

/// Project configuration for devstd.
///
/// This struct represents the contents of `devstd.toml`. Unknown fields
/// are ignored for forward compatibility; every field is optional so an
/// absent config file behaves like an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Human-readable project name (informational).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Project version string (informational).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Gitignore assembly settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore: Option<GitignoreConfig>,
}

/// The `[gitignore]` section of devstd.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitignoreConfig {
    /// Ordered template names to include by default. Command-line
    /// names completely override this list.
    pub templates: Vec<String>,

    /// Local directory searched for templates before the cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_path: Option<PathBuf>,

    /// Template cache directory. Defaults to `.devstd/templates`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// The configured default template list, or empty when the
    /// `[gitignore]` section is absent.
    pub fn templates(&self) -> &[String] {
        self.gitignore
            .as_ref()
            .map(|g| g.templates.as_slice())
            .unwrap_or(&[])
    }

    /// The configured local templates directory, if any.
    pub fn templates_path(&self) -> Option<&PathBuf> {
        self.gitignore.as_ref()?.templates_path.as_ref()
    }

    /// The template cache directory, configured or default.
    pub fn cache_dir(&self) -> PathBuf {
        self.gitignore
            .as_ref()
            .and_then(|g| g.cache_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR))
    }
}
