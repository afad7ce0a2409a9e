//! Project classification.
//!
//! Each project file is tagged once as standard, test or frontend; rules select
//! their population by kind instead of re-testing path substrings.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ClassificationConfig;
use crate::scanner::contains_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Library projects: neither test nor frontend.
    Standard,
    /// Test projects and test infrastructure.
    Test,
    /// Designated frontend applications.
    Frontend,
}

impl ProjectKind {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Test, Self::Frontend];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Test => "test",
            Self::Frontend => "frontend",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags paths using the configured test and frontend vocabularies.
///
/// Test markers win over frontend names, so a frontend's test project is a test project.
#[derive(Debug, Clone)]
pub struct ProjectClassifier {
    test_markers: Vec<String>,
    frontend_projects: Vec<String>,
}

impl ProjectClassifier {
    #[must_use]
    pub fn new(config: &ClassificationConfig) -> Self {
        Self {
            test_markers: config.test_markers.clone(),
            frontend_projects: config.frontend_projects.clone(),
        }
    }

    /// Classify a root-relative path by case-insensitive substring match.
    #[must_use]
    pub fn classify(&self, path: &Path) -> ProjectKind {
        let path = path.to_string_lossy().replace('\\', "/");
        let mentions = |vocabulary: &[String]| {
            vocabulary
                .iter()
                .any(|term| !term.is_empty() && contains_ignore_case(&path, term))
        };

        if mentions(&self.test_markers) {
            ProjectKind::Test
        } else if mentions(&self.frontend_projects) {
            ProjectKind::Frontend
        } else {
            ProjectKind::Standard
        }
    }
}

impl Default for ProjectClassifier {
    fn default() -> Self {
        Self::new(&ClassificationConfig::default())
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
