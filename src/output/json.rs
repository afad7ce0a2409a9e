use serde::Serialize;

use crate::checker::{CheckOutcome, RunReport};
use crate::error::Result;

use super::{OutputFormatter, display_path, render_failure};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    root: String,
    summary: Summary,
    results: Vec<RuleResult>,
}

#[derive(Serialize)]
struct Summary {
    rules: usize,
    passed: usize,
    failed: usize,
    errors: usize,
    violations: usize,
}

#[derive(Serialize)]
struct RuleResult {
    rule: String,
    status: &'static str,
    checked: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<ViolationEntry>,
}

#[derive(Serialize)]
struct ViolationEntry {
    path: String,
    reason: String,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let (passed, failed, errors) = report.summary();

        let output = JsonOutput {
            root: display_path(&report.root, None),
            summary: Summary {
                rules: report.outcomes.len(),
                passed,
                failed,
                errors,
                violations: report.violation_count(),
            },
            results: report
                .outcomes
                .iter()
                .map(|outcome| convert_outcome(outcome, report))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_outcome(outcome: &CheckOutcome, run: &RunReport) -> RuleResult {
    let mut result = RuleResult {
        rule: outcome.rule().to_string(),
        status: "passed",
        checked: outcome.checked(),
        message: None,
        reference: None,
        error_type: None,
        violations: Vec::new(),
    };

    match outcome {
        CheckOutcome::Passed { .. } => {}
        CheckOutcome::Failed {
            message,
            report,
            reference,
            ..
        } => {
            result.status = "failed";
            result.message = Some(render_failure(message, report, &run.root));
            result.reference.clone_from(reference);
            result.violations = report
                .violations()
                .iter()
                .map(|v| ViolationEntry {
                    path: display_path(&v.path, Some(&run.root)),
                    reason: v.reason.clone(),
                })
                .collect();
        }
        CheckOutcome::Error {
            error_type,
            message,
            ..
        } => {
            result.status = "error";
            result.message = Some(message.clone());
            result.error_type = Some(error_type.clone());
        }
    }

    result
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
