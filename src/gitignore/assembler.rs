//! Gitignore document assembly.
//!
//! Concatenates named template fragments in request order. Each resolved
//! template becomes one section: a header line `# === <Name> ===`
//! followed by the template content. Sections are separated by a single
//! blank line. A name that fails to resolve contributes nothing to the
//! output (no header, no placeholder) and is recorded in `missing`.

use crate::gitignore::TemplateSource;
use std::collections::BTreeSet;

/// An assembled gitignore document.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    /// Concatenated section text; empty when nothing resolved.
    pub text: String,
    /// Names that failed to resolve. Never affects the exit code.
    pub missing: BTreeSet<String>,
}

/// Assemble a gitignore document from an ordered list of template names.
///
/// Pure over the resolved content: the caller decides whether and where
/// to write `text`. An empty name list yields an empty document, which
/// callers must treat as "nothing to build" rather than writing an
/// empty file.
pub fn assemble(names: &[String], source: &dyn TemplateSource) -> Assembly {
    let mut sections = Vec::new();
    let mut missing = BTreeSet::new();

    for name in names {
        match source.get_template(name) {
            Some(content) => {
                // One trailing-whitespace trim keeps the blank-line
                // separator between sections at exactly one line.
                sections.push(format!("# === {} ===\n{}", name, content.trim_end()));
            }
            None => {
                missing.insert(name.clone());
            }
        }
    }

    let mut text = sections.join("\n\n");
    if !text.is_empty() {
        text.push('\n');
    }

    Assembly { text, missing }
}
