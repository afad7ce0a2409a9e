//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing:
//! patterns compile, identifiers are unique, message templates carry both placeholders.

use std::collections::HashSet;

use crate::checker::{BUILTIN_RULE_IDS, compile_declaration_regex};
use crate::config::{COUNT_PLACEHOLDER, Config, FILES_PLACEHOLDER};
use crate::scanner::compile_search_pattern;
use crate::{ConventionGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a glob or regex does not compile, the naming base is malformed,
/// the header text is empty, a consistency rule name is empty or duplicated, or a
/// message template lacks `{count}` or `{files}`.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_patterns(config)?;
    validate_naming_section(config)?;
    validate_header_section(config)?;
    validate_consistency_rules(config)?;
    validate_messages(config)?;
    Ok(())
}

fn validate_patterns(config: &Config) -> Result<()> {
    compile_search_pattern(&config.header.pattern)?;
    compile_search_pattern(&config.naming.pattern)?;
    compile_search_pattern(&config.target_framework.pattern)?;
    for rule in &config.consistency {
        compile_search_pattern(&rule.pattern)?;
    }
    Ok(())
}

fn validate_naming_section(config: &Config) -> Result<()> {
    let base = &config.naming.base;
    if base.is_empty() {
        return Err(ConventionGuardError::Config(
            "naming.base cannot be empty".to_string(),
        ));
    }
    if base.starts_with('.') || base.ends_with('.') {
        return Err(ConventionGuardError::Config(format!(
            "naming.base must not start or end with '.', got '{base}'"
        )));
    }
    Ok(())
}

fn validate_header_section(config: &Config) -> Result<()> {
    if config.header.text.is_empty() {
        return Err(ConventionGuardError::Config(
            "header.text cannot be empty".to_string(),
        ));
    }
    if config.header.text.contains('\n') {
        return Err(ConventionGuardError::Config(
            "header.text must be a single line".to_string(),
        ));
    }
    Ok(())
}

fn validate_consistency_rules(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, rule) in config.consistency.iter().enumerate() {
        if rule.name.trim().is_empty() {
            return Err(ConventionGuardError::Config(format!(
                "consistency[{i}].name cannot be empty"
            )));
        }
        if BUILTIN_RULE_IDS.contains(&rule.name.as_str()) {
            return Err(ConventionGuardError::Config(format!(
                "consistency[{i}].name '{}' is reserved for a built-in rule",
                rule.name
            )));
        }
        if !seen.insert(rule.name.as_str()) {
            return Err(ConventionGuardError::Config(format!(
                "consistency rule '{}' is defined more than once",
                rule.name
            )));
        }
        if rule.applies_to.is_empty() {
            return Err(ConventionGuardError::Config(format!(
                "consistency[{i}].applies_to must name at least one project kind"
            )));
        }
        compile_declaration_regex(&rule.regex, rule.case_insensitive)?;
    }
    Ok(())
}

fn validate_messages(config: &Config) -> Result<()> {
    let templates = [
        ("header.message", config.header.message.as_str()),
        ("naming.message", config.naming.message.as_str()),
        (
            "target_framework.message",
            config.target_framework.message.as_str(),
        ),
    ];
    for (key, template) in templates {
        validate_template(key, template)?;
    }
    for (i, rule) in config.consistency.iter().enumerate() {
        validate_template(&format!("consistency[{i}].message"), &rule.message)?;
    }
    Ok(())
}

fn validate_template(key: &str, template: &str) -> Result<()> {
    for placeholder in [COUNT_PLACEHOLDER, FILES_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(ConventionGuardError::Config(format!(
                "{key} must contain the {placeholder} placeholder"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
