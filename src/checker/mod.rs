mod classify;
mod consistency;
mod header;
mod literal;
mod naming;
mod result;

pub use classify::{ProjectClassifier, ProjectKind};
pub use consistency::{
    ConsistencyReport, MISSING_REFERENCE_REASON, check_consistency, compile_declaration_regex,
    find_reference,
};
pub use header::HeaderRule;
pub use literal::LiteralRule;
pub use naming::{NameDerivation, NamingMode, NamingRule, check_naming};
pub use result::{CheckOutcome, FailureReport, RunReport, Violation, format_failure_message};

use std::path::Path;

use crate::error::{ConventionGuardError, Result};

pub const HEADER_RULE: &str = "header";
pub const NAMING_RULE: &str = "naming";
pub const STANDARD_FRAMEWORK_RULE: &str = "target-framework.standard";
pub const FRONTEND_FRAMEWORK_RULE: &str = "target-framework.frontend";
pub const TEST_FRAMEWORK_RULE: &str = "target-framework.test";

/// Identifiers of the rules that are not configured as `[[consistency]]` entries.
pub const BUILTIN_RULE_IDS: &[&str] = &[
    HEADER_RULE,
    NAMING_RULE,
    STANDARD_FRAMEWORK_RULE,
    FRONTEND_FRAMEWORK_RULE,
    TEST_FRAMEWORK_RULE,
];

/// Identifier of the target-framework rule for a project kind.
#[must_use]
pub const fn framework_rule_id(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Standard => STANDARD_FRAMEWORK_RULE,
        ProjectKind::Frontend => FRONTEND_FRAMEWORK_RULE,
        ProjectKind::Test => TEST_FRAMEWORK_RULE,
    }
}

/// Read a whole file as text. Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).map_err(|source| ConventionGuardError::file_read(path, source))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
