use std::path::Path;

/// Decides whether a discovered file belongs in a `FileSet`.
pub trait FileFilter {
    /// `relative` is the path of the file relative to the scanned root.
    fn should_include(&self, relative: &Path) -> bool;
}

/// Excludes any path containing one of a fixed set of markers.
///
/// Matching is a case-insensitive substring test against the root-relative path,
/// rendered with `/` separators and a leading `/`, so a marker such as `/obj/`
/// catches `obj/` directories at any depth including the top level.
#[derive(Debug, Clone)]
pub struct MarkerFilter {
    markers: Vec<String>,
}

impl MarkerFilter {
    #[must_use]
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Self {
        Self {
            markers: markers
                .iter()
                .map(|m| normalize_marker(m.as_ref()))
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    /// Returns the first marker the path contains, if any.
    #[must_use]
    pub fn matching_marker(&self, relative: &Path) -> Option<&str> {
        let candidate = marker_candidate(relative);
        self.markers
            .iter()
            .find(|marker| candidate.contains(marker.as_str()))
            .map(String::as_str)
    }
}

impl FileFilter for MarkerFilter {
    fn should_include(&self, relative: &Path) -> bool {
        self.matching_marker(relative).is_none()
    }
}

/// Case-insensitive substring test, used for markers and classification vocabularies.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn normalize_marker(marker: &str) -> String {
    marker.replace('\\', "/").to_lowercase()
}

fn marker_candidate(relative: &Path) -> String {
    let path = relative.to_string_lossy().replace('\\', "/").to_lowercase();
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
