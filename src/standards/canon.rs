//! Canonical configuration standard tables.
//!
//! These tables define the conformance baseline for `config-check`.
//! They are fixed constant data, defined once and never mutated.
//!
//! Comparison semantics per table:
//! - scalar and literal-list entries require exact structural equality
//! - `RUFF_LINT_SELECT` / `RUFF_LINT_IGNORE` compare as sets, since the
//!   ordering of rule identifiers is not semantically meaningful
//! - `PROJECT_LICENSE` is exact, `PROJECT_REQUIRES_PYTHON` is a prefix
//!   match (a minimum-version declaration); both report at warning
//!   severity rather than error

use std::fmt;

/// An expected configuration value in a canonical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An exact integer value.
    Int(i64),
    /// An exact boolean value.
    Bool(bool),
    /// An exact string value.
    Str(&'static str),
    /// An exact list of strings, order-sensitive.
    StrList(&'static [&'static str]),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Int(v) => write!(f, "{}", v),
            Expected::Bool(v) => write!(f, "{}", v),
            Expected::Str(v) => write!(f, "\"{}\"", v),
            Expected::StrList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Required `[tool.ruff]` settings.
pub const RUFF: &[(&str, Expected)] = &[
    ("line-length", Expected::Int(111)),
    ("indent-width", Expected::Int(4)),
    ("target-version", Expected::Str("py311")),
];

/// Required `[tool.ruff.lint]` rule selections (set comparison).
pub const RUFF_LINT_SELECT: &[&str] = &[
    "E", "F", "W", "I", "UP", "ANN", "B", "C90", "SIM", "PTH", "RUF",
];

/// Required `[tool.ruff.lint]` rule ignores (set comparison).
pub const RUFF_LINT_IGNORE: &[&str] = &["ANN401", "B008", "E501"];

/// Required `[tool.ruff.format]` settings.
pub const RUFF_FORMAT: &[(&str, Expected)] = &[
    ("quote-style", Expected::Str("double")),
    ("indent-style", Expected::Str("space")),
    ("skip-magic-trailing-comma", Expected::Bool(false)),
    ("line-ending", Expected::Str("auto")),
];

/// Required `[tool.mypy]` settings.
pub const MYPY: &[(&str, Expected)] = &[
    ("python_version", Expected::Str("3.11")),
    ("strict", Expected::Bool(true)),
    ("pretty", Expected::Bool(true)),
    ("show_error_codes", Expected::Bool(true)),
    ("show_column_numbers", Expected::Bool(true)),
    ("warn_unused_ignores", Expected::Bool(true)),
    ("warn_unused_configs", Expected::Bool(true)),
];

/// Required `[tool.pytest.ini_options]` settings.
pub const PYTEST_INI_OPTIONS: &[(&str, Expected)] = &[
    ("log_cli", Expected::Bool(true)),
    ("testpaths", Expected::StrList(&["tests"])),
    ("python_files", Expected::StrList(&["test_*.py", "*_test.py"])),
];

/// Required `[project]` license identifier (warning severity).
pub const PROJECT_LICENSE: &str = "Apache-2.0";

/// Required `[project]` requires-python prefix (warning severity).
pub const PROJECT_REQUIRES_PYTHON: &str = ">=3.11";
