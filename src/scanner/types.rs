use std::path::{Path, PathBuf};

/// Ordered, read-only collection of files one discovery pass produced.
///
/// Paths are absolute and sorted lexicographically, so "first file" has the
/// same meaning on every platform and every run against an unchanged tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    root: PathBuf,
    pattern: String,
    paths: Vec<PathBuf>,
}

impl FileSet {
    /// Builds a set, sorting and de-duplicating `paths`.
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        pattern: impl Into<String>,
        mut paths: Vec<PathBuf>,
    ) -> Self {
        paths.sort();
        paths.dedup();
        Self {
            root: root.into(),
            pattern: pattern.into(),
            paths,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// A sub-population sharing this set's root, pattern and order.
    #[must_use]
    pub fn subset(&self, mut keep: impl FnMut(&Path) -> bool) -> Self {
        Self {
            root: self.root.clone(),
            pattern: self.pattern.clone(),
            paths: self.paths.iter().filter(|p| keep(p)).cloned().collect(),
        }
    }

    /// Path relative to the root, falling back to the path itself.
    #[must_use]
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
