use std::path::Path;

use crate::error::Result;
use crate::scanner::FileSet;

use super::{FailureReport, read_text};

/// Requires a file to contain a literal substring anywhere in its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralRule {
    literal: String,
}

impl LiteralRule {
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn is_present(&self, path: &Path) -> Result<bool> {
        Ok(read_text(path)?.contains(&self.literal))
    }

    /// Check every file in the set.
    ///
    /// # Errors
    /// Returns an error if any file cannot be read.
    pub fn check(&self, files: &FileSet) -> Result<FailureReport> {
        FailureReport::collect(files.iter(), |path| {
            Ok((!self.is_present(path)?).then(|| format!("missing {}", self.literal)))
        })
    }
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
