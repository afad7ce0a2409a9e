use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::cli::{ColorChoice, Commands, InitArgs};

fn make_cli(no_config: bool) -> Cli {
    Cli {
        command: Commands::Init(InitArgs {
            output: PathBuf::from(".convention-guard.toml"),
            force: false,
        }),
        verbose: 0,
        quiet: false,
        color: ColorChoice::Never,
        no_config,
    }
}

#[test]
fn validate_accepts_generated_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, crate::commands::generate_config_template()).unwrap();

    run_config_validate_impl(&path).unwrap();
    assert_eq!(run_config_validate(&path), EXIT_SUCCESS);
}

#[test]
fn validate_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = run_config_validate_impl(&dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn validate_rejects_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[naming]\nprefix = \"Coconut\"\n").unwrap();

    assert!(run_config_validate_impl(&path).is_err());
    assert_eq!(run_config_validate(&path), EXIT_CONFIG_ERROR);
}

#[test]
fn validate_rejects_semantic_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[naming]\nbase = \"\"\n").unwrap();

    let err = run_config_validate_impl(&path).unwrap_err();
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn show_json_round_trips() {
    let output = run_config_show_impl(None, ConfigOutputFormat::Json, &make_cli(true)).unwrap();
    let config: Config = serde_json::from_str(&output).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn show_text_lists_sections() {
    let output = run_config_show_impl(None, ConfigOutputFormat::Text, &make_cli(true)).unwrap();

    assert!(output.contains("Source: built-in defaults"));
    assert!(output.contains("  base = \"Coconut\""));
    assert!(output.contains("[[consistency]]  # test-sdk"));
    assert!(output.contains("  applies_to = [\"test\"]"));
}

#[test]
fn show_with_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[naming]\nbase = \"Walnut\"\n").unwrap();

    let output =
        run_config_show_impl(Some(&path), ConfigOutputFormat::Text, &make_cli(false)).unwrap();

    assert!(output.contains("  base = \"Walnut\""));
    assert!(output.contains("custom.toml"));
}
