use std::path::{Path, PathBuf};

use super::*;
use tempfile::TempDir;

#[test]
fn search_pattern_matches_file_names() {
    let matcher = compile_search_pattern("*.csproj").unwrap();

    assert!(matcher.is_match("Coconut.Library.csproj"));
    assert!(matcher.is_match("Coconut.Library.CSPROJ"));
    assert!(!matcher.is_match("Coconut.Library.cs"));
    assert!(!matcher.is_match("Directory.Build.props"));
}

#[test]
fn search_pattern_does_not_overmatch_longer_extensions() {
    let matcher = compile_search_pattern("*.cs").unwrap();

    assert!(matcher.is_match("Program.cs"));
    assert!(!matcher.is_match("Program.csproj"));
}

#[test]
fn invalid_search_pattern_is_error() {
    let err = compile_search_pattern("[*.cs").unwrap_err();
    assert!(matches!(err, ConventionGuardError::InvalidPattern { .. }));
}

#[test]
fn resolve_root_returns_absolute_directory() {
    let temp_dir = TempDir::new().unwrap();

    let root = resolve_root(temp_dir.path()).unwrap();

    assert!(root.is_absolute());
    assert!(root.is_dir());
}

#[test]
fn resolve_root_rejects_missing_path() {
    let temp_dir = TempDir::new().unwrap();

    let err = resolve_root(&temp_dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, ConventionGuardError::FileRead { .. }));
}

#[test]
fn resolve_root_rejects_files() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("a.cs");
    std::fs::write(&file, "").unwrap();

    let err = resolve_root(&file).unwrap_err();
    assert!(matches!(err, ConventionGuardError::Config(_)));
}

#[test]
fn file_set_sorts_and_dedups() {
    let set = FileSet::new(
        "/repo",
        "*.cs",
        vec![
            PathBuf::from("/repo/b/B.cs"),
            PathBuf::from("/repo/a/A.cs"),
            PathBuf::from("/repo/b/B.cs"),
        ],
    );

    let paths: Vec<_> = set.iter().collect();
    assert_eq!(paths, [Path::new("/repo/a/A.cs"), Path::new("/repo/b/B.cs")]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.pattern(), "*.cs");
}

#[test]
fn file_set_subset_preserves_order() {
    let set = FileSet::new(
        "/repo",
        "*.csproj",
        vec![
            PathBuf::from("/repo/c/C.Tests.csproj"),
            PathBuf::from("/repo/a/A.csproj"),
            PathBuf::from("/repo/b/B.Tests.csproj"),
        ],
    );

    let tests = set.subset(|p| p.to_string_lossy().contains(".Tests"));

    assert_eq!(
        tests.paths(),
        [
            PathBuf::from("/repo/b/B.Tests.csproj"),
            PathBuf::from("/repo/c/C.Tests.csproj"),
        ]
    );
    assert_eq!(tests.root(), Path::new("/repo"));
}

#[test]
fn file_set_relative_strips_root() {
    let set = FileSet::new("/repo", "*.cs", vec![]);

    assert_eq!(set.relative(Path::new("/repo/a/A.cs")), Path::new("a/A.cs"));
    assert_eq!(set.relative(Path::new("/other/A.cs")), Path::new("/other/A.cs"));
    assert!(set.is_empty());
}
