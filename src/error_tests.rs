use std::path::PathBuf;

use super::*;

#[test]
fn no_files_found_mentions_pattern_and_root() {
    let err = ConventionGuardError::NoFilesFound {
        pattern: "*.csproj".to_string(),
        root: PathBuf::from("/repo"),
    };
    let message = err.to_string();
    assert!(message.contains("No files were found"));
    assert!(message.contains("*.csproj"));
    assert!(message.contains("/repo"));
}

#[test]
fn file_read_keeps_source() {
    let err = ConventionGuardError::file_read(
        "Coconut.Foo.csproj",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(err.to_string().contains("Coconut.Foo.csproj"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn error_types() {
    assert_eq!(
        ConventionGuardError::Config("x".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        ConventionGuardError::NoFilesFound {
            pattern: "*.cs".to_string(),
            root: PathBuf::from("."),
        }
        .error_type(),
        "Environment"
    );
    assert_eq!(
        ConventionGuardError::Io(std::io::Error::other("boom")).error_type(),
        "IO"
    );
}

#[test]
fn invalid_regex_wraps_source() {
    let source = regex::Regex::new("(unclosed").unwrap_err();
    let err = ConventionGuardError::InvalidRegex {
        pattern: "(unclosed".to_string(),
        source,
    };
    assert!(err.to_string().contains("(unclosed"));
    assert_eq!(err.error_type(), "Pattern");
}

#[test]
fn detail_and_suggestion() {
    let err = ConventionGuardError::file_read(
        "A.cs",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert_eq!(err.detail().as_deref(), Some("gone"));
    assert!(err.suggestion().is_none());

    let err = ConventionGuardError::NoFilesFound {
        pattern: "*.cs".to_string(),
        root: PathBuf::from("."),
    };
    assert!(err.detail().is_none());
    assert!(err.suggestion().is_some());
}
