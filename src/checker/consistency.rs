//! Pattern consistency: a versioned declaration must read the same in every file.
//!
//! The first match across the set, in set order, is the reference. Every file must
//! then contain that exact text. The match itself is the comparison key, so any
//! whitespace or formatting difference inside a declaration is an inconsistency.

use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::{ConventionGuardError, Result};
use crate::scanner::FileSet;

use super::{FailureReport, read_text};

/// Reason recorded for every file when no file in the set declares a reference.
pub const MISSING_REFERENCE_REASON: &str = "no file in the set contains a matching declaration";

/// Result of a consistency check: the reference (if any) and the files that lack it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub reference: Option<String>,
    pub report: FailureReport,
}

/// Compile a declaration pattern.
///
/// # Errors
/// Returns an error if `pattern` is not a valid regular expression.
pub fn compile_declaration_regex(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| ConventionGuardError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })
}

/// First match of `pattern` in the first file (in set order) that has one.
///
/// # Errors
/// Returns an error if a file cannot be read.
pub fn find_reference<'a, I>(files: I, pattern: &Regex) -> Result<Option<String>>
where
    I: IntoIterator<Item = &'a Path>,
{
    for path in files {
        let contents = read_text(path)?;
        if let Some(found) = pattern.find(&contents) {
            debug!(path = %path.display(), reference = found.as_str(), "reference declaration");
            return Ok(Some(found.as_str().to_string()));
        }
    }
    Ok(None)
}

/// Report every file in the set that does not contain the reference declaration verbatim.
///
/// When no file matches at all, every file in the set is reported: the declaration
/// is required, and its absence everywhere is not consistency.
///
/// # Errors
/// Returns an error if a file cannot be read.
pub fn check_consistency(files: &FileSet, pattern: &Regex) -> Result<ConsistencyReport> {
    let reference = find_reference(files.iter(), pattern)?;

    let report = FailureReport::collect(files.iter(), |path| {
        let Some(reference) = reference.as_deref() else {
            return Ok(Some(MISSING_REFERENCE_REASON.to_string()));
        };
        let contents = read_text(path)?;
        Ok((!contents.contains(reference)).then(|| format!("does not contain {reference}")))
    })?;

    Ok(ConsistencyReport { reference, report })
}

#[cfg(test)]
#[path = "consistency_tests.rs"]
mod tests;
