//! Template sources for gitignore assembly.
//!
//! A template is a file named `<Name>.gitignore`. Sources implement the
//! `TemplateSource` trait so the assembler and commands never depend on
//! where content comes from:
//!
//! - `DirSource`: a project-local templates directory
//!   (`[gitignore].templates_path`)
//! - `CacheSource`: the on-disk template cache, with a small JSON
//!   metadata file recording the last refresh time
//! - `ChainSource`: ordered fallback across several sources
//!
//! Fetching templates over the network is out of scope here; the cache
//! directory is the on-disk half of that collaboration and is populated
//! externally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension for template files (no leading dot).
const TEMPLATE_EXTENSION: &str = "gitignore";

/// Metadata file maintained inside the cache directory.
const CACHE_METADATA_FILE: &str = ".meta.json";

/// A resolver translating template names into text content.
pub trait TemplateSource {
    /// Return the template content, or `None` if the name does not resolve.
    fn get_template(&self, name: &str) -> Option<String>;

    /// List available template names. Order is source-defined.
    fn list_templates(&self) -> Vec<String>;

    /// Opportunistically refresh any backing cache. Returns whether the
    /// refresh succeeded; failures are never fatal to the caller.
    fn update_cache(&self) -> bool;
}

/// A template name is used as a file stem; reject anything that could
/// escape the source directory.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

fn read_template(dir: &Path, name: &str) -> Option<String> {
    if !is_safe_name(name) {
        return None;
    }
    fs::read_to_string(dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))).ok()
}

fn list_dir(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                return None;
            }
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect();
    names.sort();
    names
}

/// Templates read from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Create a source over `dir`. The directory is not required to
    /// exist; lookups against a missing directory simply miss.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateSource for DirSource {
    fn get_template(&self, name: &str) -> Option<String> {
        read_template(&self.dir, name)
    }

    fn list_templates(&self) -> Vec<String> {
        list_dir(&self.dir)
    }

    fn update_cache(&self) -> bool {
        // Nothing to refresh for a plain directory; report usability.
        self.dir.is_dir()
    }
}

/// Refresh metadata stored alongside cached templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheMetadata {
    /// When the cache was last refreshed.
    updated_at: DateTime<Utc>,
}

/// Templates read from the on-disk cache directory.
#[derive(Debug, Clone)]
pub struct CacheSource {
    dir: PathBuf,
}

impl CacheSource {
    /// Create a source over the cache directory `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// When the cache was last refreshed, if metadata exists and parses.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        let content = fs::read_to_string(self.dir.join(CACHE_METADATA_FILE)).ok()?;
        let metadata: CacheMetadata = serde_json::from_str(&content).ok()?;
        Some(metadata.updated_at)
    }
}

impl TemplateSource for CacheSource {
    fn get_template(&self, name: &str) -> Option<String> {
        read_template(&self.dir, name)
    }

    fn list_templates(&self) -> Vec<String> {
        list_dir(&self.dir)
    }

    fn update_cache(&self) -> bool {
        if fs::create_dir_all(&self.dir).is_err() {
            return false;
        }

        let metadata = CacheMetadata {
            updated_at: Utc::now(),
        };
        let Ok(content) = serde_json::to_string_pretty(&metadata) else {
            return false;
        };
        fs::write(self.dir.join(CACHE_METADATA_FILE), content).is_ok()
    }
}

/// Ordered fallback over several sources: first hit wins.
pub struct ChainSource {
    sources: Vec<Box<dyn TemplateSource>>,
}

impl ChainSource {
    /// Create a chain over `sources`, consulted in order.
    pub fn new(sources: Vec<Box<dyn TemplateSource>>) -> Self {
        Self { sources }
    }
}

impl TemplateSource for ChainSource {
    fn get_template(&self, name: &str) -> Option<String> {
        self.sources
            .iter()
            .find_map(|source| source.get_template(name))
    }

    fn list_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .sources
            .iter()
            .flat_map(|source| source.list_templates())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    fn update_cache(&self) -> bool {
        // Refresh every source even if an earlier one fails.
        let results: Vec<bool> = self
            .sources
            .iter()
            .map(|source| source.update_cache())
            .collect();
        results.into_iter().all(|ok| ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_template(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(format!("{}.gitignore", name)), content).unwrap();
    }

    #[test]
    fn dir_source_resolves_existing_template() {
        let temp_dir = TempDir::new().unwrap();
        write_template(temp_dir.path(), "Python", "*.pyc\n");

        let source = DirSource::new(temp_dir.path());
        assert_eq!(source.get_template("Python"), Some("*.pyc\n".to_string()));
        assert_eq!(source.get_template("Node"), None);
    }

    #[test]
    fn dir_source_lists_sorted_template_stems() {
        let temp_dir = TempDir::new().unwrap();
        write_template(temp_dir.path(), "Node", "node_modules/\n");
        write_template(temp_dir.path(), "Global", ".DS_Store\n");
        fs::write(temp_dir.path().join("notes.txt"), "not a template").unwrap();

        let source = DirSource::new(temp_dir.path());
        assert_eq!(source.list_templates(), vec!["Global", "Node"]);
    }

    #[test]
    fn dir_source_on_missing_directory_misses_quietly() {
        let temp_dir = TempDir::new().unwrap();
        let source = DirSource::new(temp_dir.path().join("absent"));

        assert_eq!(source.get_template("Python"), None);
        assert!(source.list_templates().is_empty());
        assert!(!source.update_cache());
    }

    #[test]
    fn unsafe_names_never_resolve() {
        let temp_dir = TempDir::new().unwrap();
        write_template(temp_dir.path(), "Python", "*.pyc\n");

        let source = DirSource::new(temp_dir.path());
        assert_eq!(source.get_template(""), None);
        assert_eq!(source.get_template("../Python"), None);
        assert_eq!(source.get_template("a/b"), None);
        assert_eq!(source.get_template("a\\b"), None);
    }

    #[test]
    fn cache_source_update_creates_directory_and_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let cache_dir = temp_dir.path().join("cache");
        let source = CacheSource::new(&cache_dir);

        assert!(source.last_updated().is_none());
        assert!(source.update_cache());
        assert!(cache_dir.is_dir());
        assert!(source.last_updated().is_some());
    }

    #[test]
    fn cache_metadata_is_not_listed_as_a_template() {
        let temp_dir = TempDir::new().unwrap();
        let source = CacheSource::new(temp_dir.path());
        assert!(source.update_cache());
        write_template(temp_dir.path(), "Python", "*.pyc\n");

        assert_eq!(source.list_templates(), vec!["Python"]);
    }

    #[test]
    fn chain_source_prefers_earlier_sources() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_template(first.path(), "Python", "from-first\n");
        write_template(second.path(), "Python", "from-second\n");
        write_template(second.path(), "Node", "node_modules/\n");

        let chain = ChainSource::new(vec![
            Box::new(DirSource::new(first.path())),
            Box::new(DirSource::new(second.path())),
        ]);

        assert_eq!(chain.get_template("Python"), Some("from-first\n".to_string()));
        assert_eq!(chain.get_template("Node"), Some("node_modules/\n".to_string()));
        assert_eq!(chain.get_template("Rust"), None);
    }

    #[test]
    fn chain_source_lists_deduplicated_union() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_template(first.path(), "Python", "a\n");
        write_template(second.path(), "Python", "b\n");
        write_template(second.path(), "Global", "c\n");

        let chain = ChainSource::new(vec![
            Box::new(DirSource::new(first.path())),
            Box::new(DirSource::new(second.path())),
        ]);

        assert_eq!(chain.list_templates(), vec!["Global", "Python"]);
    }
}
