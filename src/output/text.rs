use std::io::Write;

use crate::checker::{CheckOutcome, RunReport};
use crate::error::Result;

use super::{OutputFormatter, ansi, display_path, render_failure};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status(outcome: &CheckOutcome) -> (&'static str, &'static str, &'static str) {
        match outcome {
            CheckOutcome::Passed { .. } => ("✓", "PASSED", ansi::GREEN),
            CheckOutcome::Failed { .. } => ("✗", "FAILED", ansi::RED),
            CheckOutcome::Error { .. } => ("✖", "ERROR", ansi::YELLOW),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_outcome(&self, outcome: &CheckOutcome, report: &RunReport, output: &mut Vec<u8>) {
        let (icon, label, color) = Self::status(outcome);
        let status = self.colorize(label, color);
        writeln!(output, "{icon} {status}: {}", outcome.rule()).ok();

        match outcome {
            CheckOutcome::Passed { checked, .. } => {
                writeln!(output, "   Files checked: {checked}").ok();
            }
            CheckOutcome::Failed {
                checked,
                message,
                report: failures,
                reference,
                ..
            } => {
                for line in render_failure(message, failures, &report.root).lines() {
                    writeln!(output, "   {line}").ok();
                }
                if let Some(reference) = reference {
                    writeln!(output, "   Reference: {reference}").ok();
                }
                if self.verbose >= 1 {
                    writeln!(output, "   Files checked: {checked}").ok();
                    for violation in failures.violations() {
                        let path = display_path(&violation.path, Some(&report.root));
                        writeln!(output, "   - {path}: {}", violation.reason).ok();
                    }
                }
            }
            CheckOutcome::Error {
                error_type,
                message,
                ..
            } => {
                for line in format!("{error_type}: {message}").lines() {
                    writeln!(output, "   {line}").ok();
                }
            }
        }
    }

    fn format_summary(&self, report: &RunReport) -> String {
        let (passed, failed, errors) = report.summary();
        let passed_str = self.colorize(&passed.to_string(), ansi::GREEN);
        let failed_str = self.colorize(&failed.to_string(), ansi::RED);
        let errors_str = self.colorize(&errors.to_string(), ansi::YELLOW);

        format!(
            "Summary: {} rules run, {passed_str} passed, {failed_str} failed, {errors_str} errors ({} violations)",
            report.outcomes.len(),
            report.violation_count()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = Vec::new();

        let (passed, problems): (Vec<_>, Vec<_>) =
            report.outcomes.iter().partition(|o| o.is_passed());

        for outcome in &problems {
            self.format_outcome(outcome, report, &mut output);
            writeln!(output).ok();
        }

        // Passed rules only in verbose mode
        if self.verbose >= 1 {
            for outcome in &passed {
                self.format_outcome(outcome, report, &mut output);
                writeln!(output).ok();
            }
        }

        writeln!(output, "{}", self.format_summary(report)).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
