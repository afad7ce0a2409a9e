use serde::{Deserialize, Serialize};

use crate::checker::{NamingMode, ProjectKind};

/// Placeholder replaced with the number of failing files in a message template.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Placeholder replaced with the newline-joined failing paths in a message template.
pub const FILES_PLACEHOLDER: &str = "{files}";

/// Top-level configuration.
///
/// Every section is optional; `Config::default()` describes the `Coconut`
/// repository conventions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub classification: ClassificationConfig,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub target_framework: TargetFrameworkConfig,

    /// Versioned declarations that must agree across a project population [[consistency]].
    #[serde(default = "default_consistency_rules")]
    pub consistency: Vec<ConsistencyRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            classification: ClassificationConfig::default(),
            header: HeaderConfig::default(),
            naming: NamingConfig::default(),
            target_framework: TargetFrameworkConfig::default(),
            consistency: default_consistency_rules(),
        }
    }
}

/// File discovery settings shared by all rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Case-insensitive substrings; any path containing one is skipped.
    /// Matched against the path with `/` separators.
    #[serde(default = "default_exclude_markers")]
    pub exclude_markers: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            exclude_markers: default_exclude_markers(),
        }
    }
}

/// Vocabulary used to tag project files as standard, test or frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClassificationConfig {
    /// A path containing any of these (case-insensitive) is a test project.
    #[serde(default = "default_test_markers")]
    pub test_markers: Vec<String>,

    /// A path containing any of these (case-insensitive) is a frontend project.
    #[serde(default = "default_frontend_projects")]
    pub frontend_projects: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            test_markers: default_test_markers(),
            frontend_projects: default_frontend_projects(),
        }
    }
}

/// Copyright header rule [header].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// File name glob selecting source files.
    #[serde(default = "default_source_pattern")]
    pub pattern: String,

    /// Text the first line must contain.
    #[serde(default = "default_header_text")]
    pub text: String,

    #[serde(default = "default_header_message")]
    pub message: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: default_source_pattern(),
            text: default_header_text(),
            message: default_header_message(),
        }
    }
}

/// Project naming rule [naming].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_project_pattern")]
    pub pattern: String,

    /// Root namespace every project name is derived from.
    #[serde(default = "default_base_namespace")]
    pub base: String,

    #[serde(default)]
    pub mode: NamingMode,

    #[serde(default = "default_naming_message")]
    pub message: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: default_project_pattern(),
            base: default_base_namespace(),
            mode: NamingMode::default(),
            message: default_naming_message(),
        }
    }
}

/// Required target framework declaration per project kind [target_framework].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TargetFrameworkConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_project_pattern")]
    pub pattern: String,

    #[serde(default = "default_standard_framework")]
    pub standard: String,

    #[serde(default = "default_app_framework")]
    pub frontend: String,

    #[serde(default = "default_app_framework")]
    pub test: String,

    #[serde(default = "default_framework_message")]
    pub message: String,
}

impl TargetFrameworkConfig {
    /// The literal a project of the given kind must contain.
    #[must_use]
    pub fn expected_for(&self, kind: ProjectKind) -> &str {
        match kind {
            ProjectKind::Standard => &self.standard,
            ProjectKind::Frontend => &self.frontend,
            ProjectKind::Test => &self.test,
        }
    }
}

impl Default for TargetFrameworkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: default_project_pattern(),
            standard: default_standard_framework(),
            frontend: default_app_framework(),
            test: default_app_framework(),
            message: default_framework_message(),
        }
    }
}

/// A versioned declaration that must have a single value across a population [[consistency]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConsistencyRule {
    /// Rule identifier, used by `--only`/`--skip` and in reports.
    pub name: String,

    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_project_pattern")]
    pub pattern: String,

    /// Project kinds the rule applies to.
    #[serde(default = "default_test_kinds")]
    pub applies_to: Vec<ProjectKind>,

    /// Regular expression matching the whole declaration.
    pub regex: String,

    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    #[serde(default = "default_consistency_message")]
    pub message: String,
}

impl ConsistencyRule {
    fn package(name: &str, package: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            pattern: default_project_pattern(),
            applies_to: default_test_kinds(),
            regex: format!(
                r#"<PackageReference Include="{}" Version="\d+\.\d+\.\d+" />"#,
                package.replace('.', r"\.")
            ),
            case_insensitive: true,
            message: format!("{{count}} csproj file(s) with wrong target {label}:\n{{files}}"),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_exclude_markers() -> Vec<String> {
    ["/.git/", "/.vs/", "/debug/", "/obj/", ".designer.cs"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_test_markers() -> Vec<String> {
    vec![".tests".to_string(), "TestInfrastructure".to_string()]
}

fn default_frontend_projects() -> Vec<String> {
    vec!["Coconut.Presentation.SomeProject.Console".to_string()]
}

fn default_source_pattern() -> String {
    "*.cs".to_string()
}

fn default_project_pattern() -> String {
    "*.csproj".to_string()
}

fn default_header_text() -> String {
    "// (c) Euphemism Inc. All right reserved.".to_string()
}

fn default_header_message() -> String {
    "Header text not found in {count} file(s):\n{files}".to_string()
}

fn default_base_namespace() -> String {
    "Coconut".to_string()
}

fn default_naming_message() -> String {
    "{count} csproj file(s) with wrong file name:\n{files}".to_string()
}

fn default_standard_framework() -> String {
    "<TargetFramework>netstandard2.0</TargetFramework>".to_string()
}

fn default_app_framework() -> String {
    "<TargetFramework>netcoreapp2.0</TargetFramework>".to_string()
}

fn default_framework_message() -> String {
    "{count} csproj file(s) with wrong target framework:\n{files}".to_string()
}

fn default_consistency_message() -> String {
    "{count} file(s) with an inconsistent declaration:\n{files}".to_string()
}

fn default_test_kinds() -> Vec<ProjectKind> {
    vec![ProjectKind::Test]
}

fn default_consistency_rules() -> Vec<ConsistencyRule> {
    vec![
        ConsistencyRule::package("mstest-adapter", "MSTest.TestAdapter", "MS Test Adapter"),
        ConsistencyRule::package("mstest-framework", "MSTest.TestFramework", "MS Test Framework"),
        ConsistencyRule::package("test-sdk", "Microsoft.NET.Test.Sdk", "MS Test Sdk"),
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
