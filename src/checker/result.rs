use std::path::{Path, PathBuf};

use crate::config::{COUNT_PLACEHOLDER, FILES_PLACEHOLDER};
use crate::error::{ConventionGuardError, Result};

/// A single file failing a convention, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub reason: String,
}

/// Ordered list of violations collected by one rule.
///
/// An empty report means the rule passed. Reports are never cut short:
/// every file in the set is evaluated before the report is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    violations: Vec<Violation>,
}

impl FailureReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Evaluate every file, recording a violation for each `Some(reason)`.
    ///
    /// # Errors
    /// Returns the first error raised by `evaluate`; I/O failures are not convention violations.
    pub fn collect<'a, I, F>(files: I, mut evaluate: F) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Path>,
        F: FnMut(&Path) -> Result<Option<String>>,
    {
        let mut report = Self::new();
        for path in files {
            if let Some(reason) = evaluate(path)? {
                report.push(path, reason);
            }
        }
        Ok(report)
    }

    pub fn push(&mut self, path: &Path, reason: impl Into<String>) {
        self.violations.push(Violation {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    /// Append another report, keeping order.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.violations.iter().map(|v| v.path.as_path())
    }
}

/// Fill a two-placeholder message template with a count and a newline-joined file list.
#[must_use]
pub fn format_failure_message(template: &str, files: &[String]) -> String {
    template
        .replace(COUNT_PLACEHOLDER, &files.len().to_string())
        .replace(FILES_PLACEHOLDER, &files.join("\n"))
}

/// Outcome of running one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed {
        rule: String,
        checked: usize,
    },
    Failed {
        rule: String,
        checked: usize,
        message: String,
        report: FailureReport,
        /// The reference declaration, for consistency rules.
        reference: Option<String>,
    },
    /// The rule could not run: nothing to check, unreadable file, bad pattern.
    Error {
        rule: String,
        error_type: String,
        message: String,
    },
}

impl CheckOutcome {
    /// Build a passed or failed outcome from a report.
    #[must_use]
    pub fn from_report(
        rule: impl Into<String>,
        checked: usize,
        message: impl Into<String>,
        report: FailureReport,
        reference: Option<String>,
    ) -> Self {
        if report.is_empty() {
            Self::Passed {
                rule: rule.into(),
                checked,
            }
        } else {
            Self::Failed {
                rule: rule.into(),
                checked,
                message: message.into(),
                report,
                reference,
            }
        }
    }

    /// Build an error outcome, keeping the error's category and underlying cause.
    #[must_use]
    pub fn from_error(rule: impl Into<String>, error: &ConventionGuardError) -> Self {
        let message = match error.detail() {
            Some(detail) => format!("{error}: {detail}"),
            None => error.to_string(),
        };
        Self::Error {
            rule: rule.into(),
            error_type: error.error_type().to_string(),
            message,
        }
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            Self::Passed { rule, .. } | Self::Failed { rule, .. } | Self::Error { rule, .. } => {
                rule
            }
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Number of files the rule evaluated; zero for errors.
    #[must_use]
    pub const fn checked(&self) -> usize {
        match self {
            Self::Passed { checked, .. } | Self::Failed { checked, .. } => *checked,
            Self::Error { .. } => 0,
        }
    }

    #[must_use]
    pub const fn report(&self) -> Option<&FailureReport> {
        match self {
            Self::Failed { report, .. } => Some(report),
            Self::Passed { .. } | Self::Error { .. } => None,
        }
    }
}

/// Every rule outcome of one run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub root: PathBuf,
    pub outcomes: Vec<CheckOutcome>,
}

impl RunReport {
    #[must_use]
    pub const fn new(root: PathBuf, outcomes: Vec<CheckOutcome>) -> Self {
        Self { root, outcomes }
    }

    /// Counts of (passed, failed, errored) rules.
    #[must_use]
    pub fn summary(&self) -> (usize, usize, usize) {
        self.outcomes
            .iter()
            .fold((0, 0, 0), |(p, f, e), outcome| match outcome {
                CheckOutcome::Passed { .. } => (p + 1, f, e),
                CheckOutcome::Failed { .. } => (p, f + 1, e),
                CheckOutcome::Error { .. } => (p, f, e + 1),
            })
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(CheckOutcome::is_failed)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(CheckOutcome::is_error)
    }

    /// Total number of violating files across all rules.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(CheckOutcome::report)
            .map(FailureReport::len)
            .sum()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
