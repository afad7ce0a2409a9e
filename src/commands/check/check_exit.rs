use crate::checker::RunReport;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

/// Exit code for a finished run.
///
/// A rule that could not run outranks convention violations.
#[must_use]
pub fn determine_exit_code(report: &RunReport) -> i32 {
    if report.has_errors() {
        EXIT_CONFIG_ERROR
    } else if report.has_failures() {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    }
}
