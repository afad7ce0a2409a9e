//! Naming deriver: a project's declared name must mirror its directory path.
//!
//! A file declaring `Base.Foo.Bar` must live in a directory whose innermost two
//! segments, read outer to inner, are `Foo` and `Bar`.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scanner::FileSet;

use super::FailureReport;

/// How strictly the declared tail is compared with the directory path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    /// Names under the base namespace must match the innermost directories.
    #[default]
    Strict,
    /// Any name under the base namespace is accepted; only names outside it are compared.
    Prefix,
}

/// Everything the deriver computed for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDerivation {
    /// File name without its extension.
    pub declared: String,
    /// Whether `declared` starts with `base.`.
    pub starts_with_base: bool,
    /// Dotted remainder after `base.`; empty when the prefix is absent.
    pub expected_tail: String,
    /// Innermost directory segments, as many as `expected_tail` has, joined with `.`.
    pub derived_from_path: String,
}

impl NameDerivation {
    /// Derive the expected name for `path` relative to the `base` namespace.
    #[must_use]
    pub fn new(path: &Path, base: &str) -> Self {
        let declared = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let prefix = format!("{base}.");
        let starts_with_base = declared.starts_with(&prefix);
        let expected_tail = if starts_with_base {
            declared[prefix.len()..].to_string()
        } else {
            String::new()
        };

        // An empty tail still splits into one (empty) segment.
        let segment_count = expected_tail.split('.').count();
        let directories = directory_segments(path);
        let innermost = &directories[directories.len().saturating_sub(segment_count)..];

        Self {
            declared,
            starts_with_base,
            expected_tail,
            derived_from_path: innermost.join("."),
        }
    }

    /// Whether the tail and the directory path agree.
    #[must_use]
    pub fn tail_matches(&self) -> bool {
        self.derived_from_path == self.expected_tail
    }
}

/// Naming rule: a base namespace plus the comparison mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRule {
    base: String,
    mode: NamingMode,
}

impl NamingRule {
    #[must_use]
    pub fn new(base: impl Into<String>, mode: NamingMode) -> Self {
        Self {
            base: base.into(),
            mode,
        }
    }

    /// Whether `path` is correctly named.
    #[must_use]
    pub fn is_correctly_named(&self, path: &Path) -> bool {
        self.violation(path).is_none()
    }

    /// The reason `path` is misnamed, or `None` when it is named correctly.
    #[must_use]
    pub fn violation(&self, path: &Path) -> Option<String> {
        let derivation = NameDerivation::new(path, &self.base);

        // A project declaring exactly the base namespace needs no path segments.
        if derivation.declared == self.base {
            return None;
        }

        if !derivation.starts_with_base {
            return (!derivation.tail_matches()).then(|| {
                format!(
                    "'{}' is outside the '{}' namespace",
                    derivation.declared, self.base
                )
            });
        }

        match self.mode {
            NamingMode::Prefix => None,
            NamingMode::Strict => (!derivation.tail_matches()).then(|| {
                format!(
                    "'{}' expects directory '{}', found '{}'",
                    derivation.declared,
                    derivation.expected_tail.replace('.', "/"),
                    derivation.derived_from_path.replace('.', "/")
                )
            }),
        }
    }

    /// Check every file in the set.
    ///
    /// # Errors
    /// Never fails today; the signature matches the other rules.
    pub fn check(&self, files: &FileSet) -> Result<FailureReport> {
        FailureReport::collect(files.iter(), |path| Ok(self.violation(path)))
    }
}

/// `true` when `path` is correctly named under `base`, using strict comparison.
#[must_use]
pub fn check_naming(path: &Path, base: &str) -> bool {
    NamingRule::new(base, NamingMode::Strict).is_correctly_named(path)
}

fn directory_segments(path: &Path) -> Vec<String> {
    path.parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
