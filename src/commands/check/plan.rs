//! Check orchestration: decide which rules run, discover each file population
//! once, and collect one outcome per rule.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::checker::{
    BUILTIN_RULE_IDS, CheckOutcome, FRONTEND_FRAMEWORK_RULE, FailureReport, HEADER_RULE,
    HeaderRule, LiteralRule, NAMING_RULE, NamingRule, ProjectClassifier, ProjectKind, RunReport,
    STANDARD_FRAMEWORK_RULE, TEST_FRAMEWORK_RULE, check_consistency, compile_declaration_regex,
};
use crate::config::Config;
use crate::error::{ConventionGuardError, Result};
use crate::scanner::{DirectoryScanner, FileScanner, FileSet, MarkerFilter};

/// Every rule id a configuration defines, built-in rules first.
#[must_use]
pub fn known_rule_ids(config: &Config) -> Vec<String> {
    BUILTIN_RULE_IDS
        .iter()
        .copied()
        .map(String::from)
        .chain(config.consistency.iter().map(|rule| rule.name.clone()))
        .collect()
}

/// Rule filter built from `--only` and `--skip`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSelection {
    only: Vec<String>,
    skip: Vec<String>,
}

impl RuleSelection {
    /// # Errors
    /// Returns a configuration error when an id names no rule in `config`.
    pub fn new(only: &[String], skip: &[String], config: &Config) -> Result<Self> {
        let known = known_rule_ids(config);
        let normalize = |ids: &[String]| -> Result<Vec<String>> {
            ids.iter()
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(|id| {
                    if known.iter().any(|k| k == id) {
                        Ok(id.to_string())
                    } else {
                        Err(ConventionGuardError::Config(format!(
                            "Unknown rule '{id}'. Known rules: {}",
                            known.join(", ")
                        )))
                    }
                })
                .collect()
        };

        Ok(Self {
            only: normalize(only)?,
            skip: normalize(skip)?,
        })
    }

    #[must_use]
    pub fn includes(&self, rule: &str) -> bool {
        (self.only.is_empty() || self.only.iter().any(|id| id == rule))
            && !self.skip.iter().any(|id| id == rule)
    }
}

type DiscoveryCache = IndexMap<String, Result<FileSet>>;

/// What a rule produced for its population.
struct Evaluation {
    checked: usize,
    report: FailureReport,
    reference: Option<String>,
}

impl Evaluation {
    const fn plain(checked: usize, report: FailureReport) -> Self {
        Self {
            checked,
            report,
            reference: None,
        }
    }
}

/// Runs the configured rules against one root.
pub struct CheckRunner<'a, S: FileScanner = DirectoryScanner<MarkerFilter>> {
    root: PathBuf,
    config: &'a Config,
    scanner: S,
    classifier: ProjectClassifier,
    selection: RuleSelection,
}

impl<'a> CheckRunner<'a> {
    /// Runner over the real filesystem, excluding the configured markers.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: &'a Config, selection: RuleSelection) -> Self {
        let scanner = DirectoryScanner::new(MarkerFilter::new(config.scanner.exclude_markers.as_slice()));
        Self::with_scanner(root, config, selection, scanner)
    }
}

impl<'a, S: FileScanner> CheckRunner<'a, S> {
    #[must_use]
    pub fn with_scanner(
        root: impl Into<PathBuf>,
        config: &'a Config,
        selection: RuleSelection,
        scanner: S,
    ) -> Self {
        Self {
            root: root.into(),
            config,
            scanner,
            classifier: ProjectClassifier::new(&config.classification),
            selection,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Run every enabled and selected rule, in a fixed order.
    ///
    /// A rule that cannot run becomes an error outcome; the remaining rules still run.
    #[must_use]
    pub fn run(&self) -> RunReport {
        let mut cache = DiscoveryCache::new();
        let mut outcomes = Vec::new();
        let config = self.config;

        if config.header.enabled && self.selection.includes(HEADER_RULE) {
            let rule = HeaderRule::new(config.header.text.as_str());
            outcomes.push(self.evaluate(
                &mut cache,
                HEADER_RULE,
                &config.header.pattern,
                &config.header.message,
                |files| Ok(Evaluation::plain(files.len(), rule.check(files)?)),
            ));
        }

        if config.naming.enabled && self.selection.includes(NAMING_RULE) {
            let rule = NamingRule::new(config.naming.base.as_str(), config.naming.mode);
            outcomes.push(self.evaluate(
                &mut cache,
                NAMING_RULE,
                &config.naming.pattern,
                &config.naming.message,
                |files| Ok(Evaluation::plain(files.len(), rule.check(files)?)),
            ));
        }

        if config.target_framework.enabled {
            let frameworks = &config.target_framework;
            for (id, kind) in [
                (STANDARD_FRAMEWORK_RULE, ProjectKind::Standard),
                (FRONTEND_FRAMEWORK_RULE, ProjectKind::Frontend),
                (TEST_FRAMEWORK_RULE, ProjectKind::Test),
            ] {
                if !self.selection.includes(id) {
                    continue;
                }
                let rule = LiteralRule::new(frameworks.expected_for(kind));
                outcomes.push(self.evaluate(
                    &mut cache,
                    id,
                    &frameworks.pattern,
                    &frameworks.message,
                    |files| {
                        let population = self.population(files, &[kind]);
                        Ok(Evaluation::plain(population.len(), rule.check(&population)?))
                    },
                ));
            }
        }

        for rule in &config.consistency {
            if !rule.enabled || !self.selection.includes(&rule.name) {
                continue;
            }
            outcomes.push(self.evaluate(
                &mut cache,
                &rule.name,
                &rule.pattern,
                &rule.message,
                |files| {
                    let regex = compile_declaration_regex(&rule.regex, rule.case_insensitive)?;
                    let population = self.population(files, &rule.applies_to);
                    let result = check_consistency(&population, &regex)?;
                    Ok(Evaluation {
                        checked: population.len(),
                        report: result.report,
                        reference: result.reference,
                    })
                },
            ));
        }

        RunReport::new(self.root.clone(), outcomes)
    }

    /// Projects of the given kinds, classified by their root-relative path.
    fn population(&self, files: &FileSet, kinds: &[ProjectKind]) -> FileSet {
        files.subset(|path| kinds.contains(&self.classifier.classify(files.relative(path))))
    }

    fn discover<'c>(
        &self,
        cache: &'c mut DiscoveryCache,
        pattern: &str,
    ) -> std::result::Result<&'c FileSet, &'c ConventionGuardError> {
        cache
            .entry(pattern.to_string())
            .or_insert_with(|| self.scanner.discover(&self.root, pattern))
            .as_ref()
    }

    fn evaluate<F>(
        &self,
        cache: &mut DiscoveryCache,
        rule: &str,
        pattern: &str,
        message: &str,
        check: F,
    ) -> CheckOutcome
    where
        F: FnOnce(&FileSet) -> Result<Evaluation>,
    {
        let outcome = match self.discover(cache, pattern) {
            Err(error) => CheckOutcome::from_error(rule, error),
            Ok(files) => match check(files) {
                Ok(evaluation) => CheckOutcome::from_report(
                    rule,
                    evaluation.checked,
                    message,
                    evaluation.report,
                    evaluation.reference,
                ),
                Err(error) => CheckOutcome::from_error(rule, &error),
            },
        };

        match &outcome {
            CheckOutcome::Passed { checked, .. } => info!(rule, checked, "passed"),
            CheckOutcome::Failed {
                checked, report, ..
            } => info!(rule, checked, violations = report.len(), "failed"),
            CheckOutcome::Error { message, .. } => warn!(rule, %message, "could not run"),
        }
        outcome
    }
}
