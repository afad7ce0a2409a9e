use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{FileFilter, FileScanner, FileSet, compile_search_pattern};
use crate::error::{ConventionGuardError, Result};

/// Walks a directory tree and collects files whose name matches a search pattern.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn walk_matching(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let matcher = compile_search_pattern(pattern)?;
        let mut matched = Vec::new();
        let mut walk_errors = 0usize;

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    walk_errors += 1;
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
                matched.push(entry.into_path());
            }
        }

        if walk_errors > 0 {
            warn!(count = walk_errors, root = %root.display(), "entries could not be read during discovery");
        }
        Ok(matched)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn discover(&self, root: &Path, pattern: &str) -> Result<FileSet> {
        let matched = Self::walk_matching(root, pattern)?;
        let no_files = || ConventionGuardError::NoFilesFound {
            pattern: pattern.to_string(),
            root: root.to_path_buf(),
        };
        if matched.is_empty() {
            return Err(no_files());
        }

        let total = matched.len();
        let kept: Vec<_> = matched
            .into_iter()
            .filter(|p| self.filter.should_include(p.strip_prefix(root).unwrap_or(p)))
            .collect();
        debug!(pattern, matched = total, kept = kept.len(), "discovered files");

        if kept.is_empty() {
            return Err(no_files());
        }
        Ok(FileSet::new(root, pattern, kept))
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
