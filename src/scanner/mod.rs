mod directory;
mod filter;
mod types;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, MarkerFilter, contains_ignore_case};
pub use types::FileSet;

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{ConventionGuardError, Result};

/// Trait for discovering the files a check operates over.
pub trait FileScanner {
    /// Find every file under `root` whose name matches `pattern`.
    ///
    /// # Errors
    /// Returns `NoFilesFound` when nothing matches, before or after exclusion filtering,
    /// and `InvalidPattern` when `pattern` is not a valid glob.
    fn discover(&self, root: &Path, pattern: &str) -> Result<FileSet>;
}

/// Compile a file-name glob such as `*.csproj`. Matching ignores case.
///
/// # Errors
/// Returns an error if the pattern is not a valid glob.
pub fn compile_search_pattern(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| ConventionGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Resolve the directory to check into an absolute path.
///
/// # Errors
/// Returns an error if the path does not exist or is not a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root =
        dunce::canonicalize(path).map_err(|source| ConventionGuardError::file_read(path, source))?;
    if !root.is_dir() {
        return Err(ConventionGuardError::Config(format!(
            "Root is not a directory: {}",
            path.display()
        )));
    }
    Ok(root)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
