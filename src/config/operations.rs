//! Config loading, discovery, and validation operations.

use super::model::ProjectConfig;
use crate::error::{DevstdError, Result};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "devstd.toml";

impl ProjectConfig {
    /// Load config from a TOML file.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the devstd.toml file
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectConfig)` - Successfully loaded and validated config
    /// * `Err(DevstdError::UserError)` - Read/parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DevstdError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ProjectConfig = toml::from_str(content)
            .map_err(|e| DevstdError::UserError(format!("failed to parse config TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Find the nearest `devstd.toml`, walking from `start` upward.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config from `start`, or the default (empty)
    /// config when no `devstd.toml` exists. A config file that exists
    /// but fails to load is still an error.
    pub fn load_or_default(start: &Path) -> Result<Self> {
        match Self::discover(start) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - template names must be non-empty
    /// - template names must not contain path separators or `..`
    ///   (names are used as file stems against the template sources)
    pub fn validate(&self) -> Result<()> {
        for name in self.templates() {
            if name.is_empty() {
                return Err(DevstdError::UserError(
                    "config validation failed: gitignore template names must be non-empty"
                        .to_string(),
                ));
            }
            if name.contains('/') || name.contains('\\') || name.contains("..") {
                return Err(DevstdError::UserError(format!(
                    "config validation failed: gitignore template name '{}' must not contain path separators",
                    name
                )));
            }
        }

        Ok(())
    }
}
