//! Project configuration for devstd.
//!
//! This module handles `devstd.toml`: the model with serde defaults,
//! loading and validation, and discovery of the nearest config file.
//!
//! The module is split into:
//! - `model`: struct definitions and defaults
//! - `operations`: loading, discovery, validation

mod model;
mod operations;

pub use model::{GitignoreConfig, ProjectConfig};
pub use operations::CONFIG_FILE_NAME;
