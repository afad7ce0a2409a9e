use std::cell::RefCell;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::checker::{CheckOutcome, RunReport};
use crate::config::{Config, ConsistencyRule};
use crate::scanner::{DirectoryScanner, FileScanner, FileSet, MarkerFilter};

const HEADER: &str = "// (c) Euphemism Inc. All right reserved.";
const STANDARD: &str = "<TargetFramework>netstandard2.0</TargetFramework>";
const APP: &str = "<TargetFramework>netcoreapp2.0</TargetFramework>";

fn test_project(framework: &str, adapter: &str) -> String {
    format!(
        "<Project>\n  {framework}\n  \
         <PackageReference Include=\"MSTest.TestAdapter\" Version=\"{adapter}\" />\n  \
         <PackageReference Include=\"MSTest.TestFramework\" Version=\"1.2.0\" />\n  \
         <PackageReference Include=\"Microsoft.NET.Test.Sdk\" Version=\"15.5.0\" />\n\
         </Project>\n"
    )
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn conforming_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/Core/Coconut.Core.csproj", &format!("<Project>{STANDARD}</Project>"));
    write(root, "src/Core/Class1.cs", &format!("{HEADER}\nnamespace Coconut.Core;\n"));
    write(
        root,
        "src/Presentation/SomeProject/Console/Coconut.Presentation.SomeProject.Console.csproj",
        &format!("<Project>{APP}</Project>"),
    );
    write(root, "tests/Core/Tests/Coconut.Core.Tests.csproj", &test_project(APP, "1.2.0"));
    write(root, "tests/Core/Tests/CoreTests.cs", &format!("{HEADER}\n"));
    write(root, "tests/Web/Tests/Coconut.Web.Tests.csproj", &test_project(APP, "1.2.0"));
    dir
}

fn run(root: &Path, config: &Config) -> RunReport {
    CheckRunner::new(root, config, RuleSelection::default()).run()
}

fn outcome<'a>(report: &'a RunReport, rule: &str) -> &'a CheckOutcome {
    report
        .outcomes
        .iter()
        .find(|o| o.rule() == rule)
        .unwrap_or_else(|| panic!("no outcome for {rule}"))
}

#[test]
fn conforming_tree_passes_every_rule() {
    let dir = conforming_tree();
    let report = run(dir.path(), &Config::default());

    let rules: Vec<_> = report.outcomes.iter().map(CheckOutcome::rule).collect();
    assert_eq!(
        rules,
        vec![
            "header",
            "naming",
            "target-framework.standard",
            "target-framework.frontend",
            "target-framework.test",
            "mstest-adapter",
            "mstest-framework",
            "test-sdk",
        ]
    );
    assert!(report.outcomes.iter().all(CheckOutcome::is_passed), "{report:?}");
    assert_eq!(outcome(&report, "header").checked(), 2);
    assert_eq!(outcome(&report, "naming").checked(), 4);
    assert_eq!(outcome(&report, "target-framework.standard").checked(), 1);
    assert_eq!(outcome(&report, "target-framework.frontend").checked(), 1);
    assert_eq!(outcome(&report, "target-framework.test").checked(), 2);
    assert_eq!(determine_exit_code(&report), crate::EXIT_SUCCESS);
}

#[test]
fn missing_headers_are_aggregated() {
    let dir = conforming_tree();
    write(dir.path(), "src/Core/Bad.cs", "namespace Coconut.Core;\n");
    write(dir.path(), "src/Core/Empty.cs", "");
    write(dir.path(), "src/Core/Late.cs", &format!("\n{HEADER}\n"));

    let report = run(dir.path(), &Config::default());
    let header = outcome(&report, "header");

    assert!(header.is_failed());
    let failing: Vec<_> = header
        .report()
        .unwrap()
        .paths()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(failing, vec!["Bad.cs", "Empty.cs", "Late.cs"]);
    assert_eq!(determine_exit_code(&report), crate::EXIT_VIOLATIONS_FOUND);
}

#[test]
fn excluded_paths_are_not_checked() {
    let dir = conforming_tree();
    write(dir.path(), "src/Core/obj/Generated.cs", "// generated\n");
    write(dir.path(), "src/Core/Form1.Designer.cs", "// generated\n");

    let report = run(dir.path(), &Config::default());

    assert!(outcome(&report, "header").is_passed());
}

#[test]
fn misnamed_project_fails_naming() {
    let dir = conforming_tree();
    write(dir.path(), "src/Core/Coconut.Wrong.csproj", &format!("<Project>{STANDARD}</Project>"));

    let report = run(dir.path(), &Config::default());
    let naming = outcome(&report, "naming");

    assert!(naming.is_failed());
    assert_eq!(naming.report().unwrap().len(), 1);
    assert!(outcome(&report, "target-framework.standard").is_passed());
}

#[test]
fn wrong_framework_is_reported_per_kind() {
    let dir = conforming_tree();
    write(
        dir.path(),
        "tests/Web/Tests/Coconut.Web.Tests.csproj",
        &test_project(STANDARD, "1.2.0"),
    );

    let report = run(dir.path(), &Config::default());

    assert!(outcome(&report, "target-framework.standard").is_passed());
    let test = outcome(&report, "target-framework.test");
    assert!(test.is_failed());
    assert_eq!(test.report().unwrap().len(), 1);
}

#[test]
fn inconsistent_adapter_version_reports_reference() {
    let dir = conforming_tree();
    write(
        dir.path(),
        "tests/Web/Tests/Coconut.Web.Tests.csproj",
        &test_project(APP, "1.3.0"),
    );

    let report = run(dir.path(), &Config::default());

    match outcome(&report, "mstest-adapter") {
        CheckOutcome::Failed {
            report, reference, ..
        } => {
            assert_eq!(
                reference.as_deref(),
                Some(r#"<PackageReference Include="MSTest.TestAdapter" Version="1.2.0" />"#)
            );
            let failing: Vec<_> = report.paths().collect();
            assert_eq!(failing.len(), 1);
            assert!(failing[0].ends_with("Coconut.Web.Tests.csproj"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(outcome(&report, "mstest-framework").is_passed());
    assert!(outcome(&report, "test-sdk").is_passed());
}

#[test]
fn missing_sources_is_an_error_for_that_rule_only() {
    let dir = conforming_tree();
    fs::remove_file(dir.path().join("src/Core/Class1.cs")).unwrap();
    fs::remove_file(dir.path().join("tests/Core/Tests/CoreTests.cs")).unwrap();

    let report = run(dir.path(), &Config::default());

    match outcome(&report, "header") {
        CheckOutcome::Error {
            error_type,
            message,
            ..
        } => {
            assert_eq!(error_type, "Environment");
            assert!(message.contains("No files were found"));
        }
        other => panic!("expected error, got {other:?}"),
    }
    assert!(outcome(&report, "naming").is_passed());
    assert_eq!(determine_exit_code(&report), crate::EXIT_CONFIG_ERROR);
}

#[test]
fn no_frontend_projects_passes_vacuously() {
    let dir = conforming_tree();
    fs::remove_dir_all(dir.path().join("src/Presentation")).unwrap();

    let report = run(dir.path(), &Config::default());
    let frontend = outcome(&report, "target-framework.frontend");

    assert!(frontend.is_passed());
    assert_eq!(frontend.checked(), 0);
}

#[test]
fn invalid_regex_becomes_pattern_error() {
    let dir = conforming_tree();
    let mut config = Config::default();
    config.consistency = vec![ConsistencyRule {
        name: "broken".to_string(),
        regex: "(unclosed".to_string(),
        ..config.consistency[0].clone()
    }];

    let report = run(dir.path(), &config);

    match outcome(&report, "broken") {
        CheckOutcome::Error { error_type, .. } => assert_eq!(error_type, "Pattern"),
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn disabled_sections_are_skipped() {
    let dir = conforming_tree();
    let mut config = Config::default();
    config.header.enabled = false;
    config.target_framework.enabled = false;
    config.consistency[1].enabled = false;

    let report = run(dir.path(), &config);
    let rules: Vec<_> = report.outcomes.iter().map(CheckOutcome::rule).collect();

    assert_eq!(rules, vec!["naming", "mstest-adapter", "test-sdk"]);
}

#[test]
fn selection_only_and_skip() {
    let config = Config::default();
    let only = RuleSelection::new(&["header".to_string()], &[], &config).unwrap();
    assert!(only.includes("header"));
    assert!(!only.includes("naming"));

    let skip = RuleSelection::new(&[], &[" test-sdk ".to_string()], &config).unwrap();
    assert!(skip.includes("header"));
    assert!(!skip.includes("test-sdk"));

    let dir = conforming_tree();
    let report = CheckRunner::new(dir.path(), &config, only).run();
    assert_eq!(report.outcomes.len(), 1);
}

#[test]
fn selection_rejects_unknown_rule() {
    let err = RuleSelection::new(&["line-count".to_string()], &[], &Config::default()).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Unknown rule 'line-count'"));
    assert!(message.contains("mstest-adapter"));
}

#[test]
fn known_rule_ids_include_consistency_names() {
    let ids = known_rule_ids(&Config::default());
    assert_eq!(ids.len(), 8);
    assert_eq!(ids[0], "header");
    assert_eq!(ids[7], "test-sdk");
}

struct CountingScanner {
    inner: DirectoryScanner<MarkerFilter>,
    patterns: RefCell<Vec<String>>,
}

impl FileScanner for CountingScanner {
    fn discover(&self, root: &Path, pattern: &str) -> crate::Result<FileSet> {
        self.patterns.borrow_mut().push(pattern.to_string());
        self.inner.discover(root, pattern)
    }
}

#[test]
fn each_pattern_is_discovered_once() {
    let dir = conforming_tree();
    let config = Config::default();
    let scanner = CountingScanner {
        inner: DirectoryScanner::new(MarkerFilter::new(config.scanner.exclude_markers.as_slice())),
        patterns: RefCell::new(Vec::new()),
    };

    let runner = CheckRunner::with_scanner(dir.path(), &config, RuleSelection::default(), scanner);
    let report = runner.run();

    assert_eq!(report.outcomes.len(), 8);
    assert_eq!(
        *runner_patterns(&runner),
        vec!["*.cs".to_string(), "*.csproj".to_string()]
    );
}

fn runner_patterns<'r>(
    runner: &'r CheckRunner<'_, CountingScanner>,
) -> std::cell::Ref<'r, Vec<String>> {
    runner.scanner().patterns.borrow()
}
