mod error_output;
mod json;
mod markdown;
mod path;
mod text;

pub use error_output::{ErrorOutput, print_error, print_error_full};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use path::{display_path, normalize_separators};
pub use text::{ColorMode, TextFormatter};

use std::path::Path;

use crate::checker::{FailureReport, RunReport, format_failure_message};
use crate::error::Result;

/// Trait for rendering a run into one of the report formats.
pub trait OutputFormatter {
    /// Format the run into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &RunReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Violating paths of a report, relative to `root` with `/` separators.
#[must_use]
pub fn violation_paths(report: &FailureReport, root: &Path) -> Vec<String> {
    report
        .paths()
        .map(|path| display_path(path, Some(root)))
        .collect()
}

/// The rule's message template filled with the report's count and paths.
#[must_use]
pub fn render_failure(template: &str, report: &FailureReport, root: &Path) -> String {
    format_failure_message(template, &violation_paths(report, root))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
