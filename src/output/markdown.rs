use std::fmt::Write;

use crate::checker::{CheckOutcome, RunReport};
use crate::error::Result;

use super::{OutputFormatter, display_path};

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn status_icon(outcome: &CheckOutcome) -> &'static str {
        match outcome {
            CheckOutcome::Passed { .. } => "✅",
            CheckOutcome::Failed { .. } => "❌",
            CheckOutcome::Error { .. } => "⚠️",
        }
    }

    const fn status_text(outcome: &CheckOutcome) -> &'static str {
        match outcome {
            CheckOutcome::Passed { .. } => "Passed",
            CheckOutcome::Failed { .. } => "Failed",
            CheckOutcome::Error { .. } => "Error",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();
        let (passed, failed, errors) = report.summary();

        writeln!(output, "## Convention Guard Results\n").ok();
        writeln!(output, "| Metric | Count |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Rules | {} |", report.outcomes.len()).ok();
        writeln!(output, "| ✅ Passed | {passed} |").ok();
        writeln!(output, "| ❌ Failed | {failed} |").ok();
        writeln!(output, "| ⚠️ Errors | {errors} |").ok();
        writeln!(output, "| Violations | {} |", report.violation_count()).ok();
        writeln!(output).ok();

        writeln!(output, "### Rules\n").ok();
        writeln!(output, "| Status | Rule | Checked | Violations |").ok();
        writeln!(output, "|:------:|------|--------:|-----------:|").ok();
        for outcome in &report.outcomes {
            let violations = outcome.report().map_or(0, |r| r.len());
            writeln!(
                output,
                "| {} {} | `{}` | {} | {violations} |",
                Self::status_icon(outcome),
                Self::status_text(outcome),
                outcome.rule(),
                outcome.checked()
            )
            .ok();
        }

        let problems: Vec<_> = report.outcomes.iter().filter(|o| !o.is_passed()).collect();
        if problems.is_empty() {
            return Ok(output);
        }

        writeln!(output, "\n### Details").ok();
        for outcome in problems {
            writeln!(output, "\n#### `{}`\n", outcome.rule()).ok();
            match outcome {
                CheckOutcome::Failed {
                    report: failures,
                    reference,
                    ..
                } => {
                    if let Some(reference) = reference {
                        writeln!(output, "Reference: `{reference}`\n").ok();
                    }
                    writeln!(output, "| File | Reason |").ok();
                    writeln!(output, "|------|--------|").ok();
                    for violation in failures.violations() {
                        let path = display_path(&violation.path, Some(&report.root));
                        writeln!(output, "| `{path}` | {} |", escape_cell(&violation.reason)).ok();
                    }
                }
                CheckOutcome::Error {
                    error_type,
                    message,
                    ..
                } => {
                    writeln!(output, "**{error_type}**: {}", message.replace('\n', "<br>")).ok();
                }
                CheckOutcome::Passed { .. } => {}
            }
        }

        Ok(output)
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
