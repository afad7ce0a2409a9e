//! Paths in reports are shown relative to the checked root, with `/` separators
//! on every platform.

use std::path::Path;

/// Format a path for display, relative to `root` when it lies beneath it.
///
/// Returns `"."` when `path` is the root itself.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = normalize_separators(&relative.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
