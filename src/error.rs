use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConventionGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "No files were found.\nSearch pattern: {pattern}\nRoot: {}",
        root.display()
    )]
    NoFilesFound { pattern: String, root: PathBuf },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ConventionGuardError {
    /// Short category label used by the error printer.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::NoFilesFound { .. } => "Environment",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// The underlying cause, for errors that wrap one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NoFilesFound { .. } => {
                Some("Check the root directory and the scanner.exclude_markers setting")
            }
            Self::TomlParse(_) => Some("Run 'convention-guard config validate <file>' for details"),
            _ => None,
        }
    }

    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConventionGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
