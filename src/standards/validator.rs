//! Conformance validation against the canonical standard tables.
//!
//! The validator is a pure function over a parsed TOML document:
//! - every mismatch against `[tool.*]` tables accumulates an error
//! - `[project]` metadata mismatches accumulate warnings
//! - absent tables default to empty, so every canonical key reports
//!
//! File-level wrapping lives in `check_file`, which converts read/parse
//! failures into a single error entry instead of propagating them.

use crate::standards::canon::{self, Expected};
use std::collections::BTreeSet;
use std::path::Path;
use toml::Value;

/// Result of validating one configuration document.
///
/// Both sequences are append-only during a single validation pass and
/// preserve check order.
#[derive(Debug, Clone, Default)]
pub struct Conformance {
    /// Standard deviations that cause overall failure.
    pub errors: Vec<String>,
    /// Metadata deviations; cause failure only under strict mode.
    pub warnings: Vec<String>,
}

impl Conformance {
    /// True when neither errors nor warnings were recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate a parsed pyproject.toml document against all canonical tables.
///
/// # Arguments
///
/// * `doc` - The parsed TOML document (top-level table)
///
/// # Returns
///
/// A `Conformance` with ordered error and warning messages. Empty on a
/// fully conformant document.
pub fn validate(doc: &Value) -> Conformance {
    let mut result = Conformance::default();

    check_ruff(doc, &mut result.errors);
    check_exact_table(doc, &["tool", "mypy"], "[tool.mypy]", canon::MYPY, &mut result.errors);
    check_exact_table(
        doc,
        &["tool", "pytest", "ini_options"],
        "[tool.pytest.ini_options]",
        canon::PYTEST_INI_OPTIONS,
        &mut result.errors,
    );
    check_project_metadata(doc, &mut result.warnings);

    result
}

/// Validate a pyproject.toml file on disk.
///
/// Read or parse failures short-circuit into a single error entry; no
/// further checks run and no failure escapes this boundary.
pub fn check_file(path: &Path) -> Conformance {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            return Conformance {
                errors: vec![format!("Failed to parse {}: {}", path.display(), err)],
                warnings: Vec::new(),
            };
        }
    };

    match content.parse::<Value>() {
        Ok(doc) => validate(&doc),
        Err(err) => Conformance {
            errors: vec![format!("Failed to parse {}: {}", path.display(), err)],
            warnings: Vec::new(),
        },
    }
}

/// Check the `[tool.ruff]` family: scalar settings, lint rule sets,
/// and formatter settings.
fn check_ruff(doc: &Value, errors: &mut Vec<String>) {
    check_exact_table(doc, &["tool", "ruff"], "[tool.ruff]", canon::RUFF, errors);

    check_string_set(
        doc,
        &["tool", "ruff", "lint"],
        "[tool.ruff.lint]",
        "select",
        canon::RUFF_LINT_SELECT,
        errors,
    );
    check_string_set(
        doc,
        &["tool", "ruff", "lint"],
        "[tool.ruff.lint]",
        "ignore",
        canon::RUFF_LINT_IGNORE,
        errors,
    );

    check_exact_table(
        doc,
        &["tool", "ruff", "format"],
        "[tool.ruff.format]",
        canon::RUFF_FORMAT,
        errors,
    );
}

/// Check `[project]` metadata at warning severity.
///
/// `license` requires exact equality; `requires-python` is a prefix
/// match since it declares a minimum version.
fn check_project_metadata(doc: &Value, warnings: &mut Vec<String>) {
    let project = value_at(doc, &["project"]);

    let license = project.and_then(|t| t.get("license"));
    if license.and_then(Value::as_str) != Some(canon::PROJECT_LICENSE) {
        warnings.push(format!(
            "[project] license should be \"{}\", got {}",
            canon::PROJECT_LICENSE,
            render_actual(license)
        ));
    }

    let requires_python = project.and_then(|t| t.get("requires-python"));
    let prefix_ok = requires_python
        .and_then(Value::as_str)
        .is_some_and(|s| s.starts_with(canon::PROJECT_REQUIRES_PYTHON));
    if !prefix_ok {
        warnings.push(format!(
            "[project] requires-python should start with \"{}\", got {}",
            canon::PROJECT_REQUIRES_PYTHON,
            render_actual(requires_python)
        ));
    }
}

/// Compare every key of a canonical table against the document table at
/// `path`, appending one message per mismatch.
fn check_exact_table(
    doc: &Value,
    path: &[&str],
    section: &str,
    table: &[(&str, Expected)],
    out: &mut Vec<String>,
) {
    let actual_table = value_at(doc, path);

    for (key, expected) in table {
        let actual = actual_table.and_then(|t| t.get(*key));
        if !expected_matches(expected, actual) {
            out.push(format!(
                "{} {} should be {}, got {}",
                section,
                key,
                expected,
                render_actual(actual)
            ));
        }
    }
}

/// Compare a list-valued key as a set of strings (order-insensitive).
fn check_string_set(
    doc: &Value,
    path: &[&str],
    section: &str,
    key: &str,
    expected: &'static [&'static str],
    out: &mut Vec<String>,
) {
    let actual = value_at(doc, path).and_then(|t| t.get(key));
    let expected_set: BTreeSet<&str> = expected.iter().copied().collect();

    let matches = match string_set(actual) {
        Some(actual_set) => actual_set == expected_set,
        None => false,
    };

    if !matches {
        out.push(format!(
            "{} {} should be {}, got {}",
            section,
            key,
            Expected::StrList(expected),
            render_actual(actual)
        ));
    }
}

/// Walk a fixed key path through nested tables. Any absent or
/// non-table segment yields `None` (treated as an empty table).
fn value_at<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a toml::map::Map<String, Value>> {
    let mut current = doc.as_table()?;
    for segment in path {
        current = current.get(*segment)?.as_table()?;
    }
    Some(current)
}

/// Structural equality between an expected value and an actual TOML value.
fn expected_matches(expected: &Expected, actual: Option<&Value>) -> bool {
    match (expected, actual) {
        (Expected::Int(e), Some(Value::Integer(a))) => e == a,
        (Expected::Bool(e), Some(Value::Boolean(a))) => e == a,
        (Expected::Str(e), Some(Value::String(a))) => *e == a.as_str(),
        (Expected::StrList(e), Some(Value::Array(a))) => {
            a.len() == e.len()
                && e.iter()
                    .zip(a.iter())
                    .all(|(exp, act)| act.as_str() == Some(*exp))
        }
        _ => false,
    }
}

/// Interpret a value as a set of strings; `None` input means the key is
/// absent and reads as the empty set. Non-array values and arrays with
/// non-string elements yield `None` (never equal).
fn string_set(value: Option<&Value>) -> Option<BTreeSet<&str>> {
    match value {
        None => Some(BTreeSet::new()),
        Some(Value::Array(items)) => items.iter().map(Value::as_str).collect(),
        Some(_) => None,
    }
}

/// Render an actual value for a mismatch message.
fn render_actual(value: Option<&Value>) -> String {
    match value {
        None => "(unset)".to_string(),
        Some(value) => render_value(value),
    }
}

/// Render a TOML value in inline TOML syntax.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(d) => d.to_string(),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Table(table) => {
            let rendered: Vec<String> = table
                .iter()
                .map(|(k, v)| format!("{} = {}", k, render_value(v)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
    }
}
