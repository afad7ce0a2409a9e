use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ConventionGuardError, Result};
use crate::scanner::FileSet;

use super::FailureReport;

/// Requires the first line of every file to contain a header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRule {
    text: String,
}

impl HeaderRule {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whether the first line of `path` contains the header. An empty file has no header.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn check_header(&self, path: &Path) -> Result<bool> {
        let first = first_line(path)?;
        Ok(first.is_some_and(|line| line.contains(&self.text)))
    }

    /// Check every file in the set.
    ///
    /// # Errors
    /// Returns an error if any file cannot be read.
    pub fn check(&self, files: &FileSet) -> Result<FailureReport> {
        FailureReport::collect(files.iter(), |path| {
            Ok((!self.check_header(path)?).then(|| "first line lacks the header".to_string()))
        })
    }
}

fn first_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|source| ConventionGuardError::file_read(path, source))?;
    let mut buf = Vec::new();
    let read = BufReader::new(file)
        .read_until(b'\n', &mut buf)
        .map_err(|source| ConventionGuardError::file_read(path, source))?;
    if read == 0 {
        return Ok(None);
    }
    // `\r`, `\n` and `\r\n` all end a line.
    if let Some(end) = buf.iter().position(|&b| b == b'\r' || b == b'\n') {
        buf.truncate(end);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
