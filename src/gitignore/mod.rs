//! Gitignore template assembly.
//!
//! `source` defines the `TemplateSource` abstraction (local directory,
//! on-disk cache, ordered chain); `assembler` concatenates resolved
//! templates into one document. The assembler depends only on the
//! trait, so tests run against an in-memory source.

mod assembler;
mod source;

pub use assembler::{Assembly, assemble};
pub use source::{CacheSource, ChainSource, DirSource, TemplateSource};
