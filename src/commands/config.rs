use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, report_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file: it must exist, parse, and pass semantic checks.
///
/// # Errors
/// Returns the first problem found.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration for the current directory.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let loaded = load_config(config_path, cli.no_config, Path::new("."))?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => {
            let source = loaded
                .source
                .as_deref()
                .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
            Ok(format_config_text(&loaded.config, &source))
        }
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config, source: &str) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    let _ = writeln!(output, "Source: {source}\n");

    output.push_str("[scanner]\n");
    let _ = writeln!(output, "  exclude_markers = {:?}", config.scanner.exclude_markers);

    output.push_str("\n[classification]\n");
    let _ = writeln!(output, "  test_markers = {:?}", config.classification.test_markers);
    let _ = writeln!(
        output,
        "  frontend_projects = {:?}",
        config.classification.frontend_projects
    );

    output.push_str("\n[header]\n");
    let _ = writeln!(output, "  enabled = {}", config.header.enabled);
    let _ = writeln!(output, "  pattern = \"{}\"", config.header.pattern);
    let _ = writeln!(output, "  text = \"{}\"", config.header.text);

    output.push_str("\n[naming]\n");
    let _ = writeln!(output, "  enabled = {}", config.naming.enabled);
    let _ = writeln!(output, "  pattern = \"{}\"", config.naming.pattern);
    let _ = writeln!(output, "  base = \"{}\"", config.naming.base);
    let _ = writeln!(output, "  mode = {:?}", config.naming.mode);

    let frameworks = &config.target_framework;
    output.push_str("\n[target_framework]\n");
    let _ = writeln!(output, "  enabled = {}", frameworks.enabled);
    let _ = writeln!(output, "  pattern = \"{}\"", frameworks.pattern);
    let _ = writeln!(output, "  standard = \"{}\"", frameworks.standard);
    let _ = writeln!(output, "  frontend = \"{}\"", frameworks.frontend);
    let _ = writeln!(output, "  test = \"{}\"", frameworks.test);

    for rule in &config.consistency {
        let _ = writeln!(output, "\n[[consistency]]  # {}", rule.name);
        let _ = writeln!(output, "  enabled = {}", rule.enabled);
        let _ = writeln!(output, "  pattern = \"{}\"", rule.pattern);
        let kinds: Vec<_> = rule.applies_to.iter().map(|k| k.as_str()).collect();
        let _ = writeln!(output, "  applies_to = {kinds:?}");
        let _ = writeln!(output, "  regex = '{}'", rule.regex);
        let _ = writeln!(output, "  case_insensitive = {}", rule.case_insensitive);
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
