//! Canonical configuration standards and the conformance validator.
//!
//! `canon` holds the immutable standard tables; `validator` compares a
//! parsed `pyproject.toml` document against them and accumulates
//! error/warning messages.

pub mod canon;
mod validator;

pub use validator::{Conformance, check_file, validate};
