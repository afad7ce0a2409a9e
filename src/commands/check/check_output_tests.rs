use std::path::{Path, PathBuf};

use super::*;
use crate::checker::{CheckOutcome, FailureReport, RunReport};
use crate::output::{ColorMode, OutputFormat};

fn sample() -> RunReport {
    let mut report = FailureReport::new();
    report.push(Path::new("/repo/src/Core/Coconut.Wrong.csproj"), "mismatch");
    RunReport::new(
        PathBuf::from("/repo"),
        vec![CheckOutcome::from_report(
            "naming",
            3,
            "{count} csproj file(s) with wrong file name:\n{files}",
            report,
            None,
        )],
    )
}

#[test]
fn text_output() {
    let output = format_output(OutputFormat::Text, &sample(), ColorMode::Never, 0).unwrap();

    assert!(output.contains("1 csproj file(s) with wrong file name:"));
    assert!(output.contains("src/Core/Coconut.Wrong.csproj"));
}

#[test]
fn json_output() {
    let output = format_output(OutputFormat::Json, &sample(), ColorMode::Never, 0).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["results"][0]["rule"], "naming");
    assert_eq!(json["summary"]["violations"], 1);
}

#[test]
fn markdown_output() {
    let output = format_output(OutputFormat::Markdown, &sample(), ColorMode::Never, 0).unwrap();

    assert!(output.contains("| ❌ Failed | `naming` | 3 | 1 |"));
}
