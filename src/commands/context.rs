use std::fs;
use std::path::Path;

use tracing::info;

use crate::ConventionGuardError;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::print_error_full;

/// Load configuration for a run rooted at `root`.
///
/// An explicit `config_path` wins; otherwise the loader searches the root and
/// the user configuration directory. `no_config` skips both.
///
/// # Errors
/// Returns an error if a configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
    root: &Path,
) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))?;
    match &loaded.source {
        Some(path) => info!(path = %path.display(), "using configuration file"),
        None => info!("using built-in configuration"),
    }
    Ok(loaded)
}

/// Write `content` to `output_path`, or to stdout unless `quiet`.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Print a command failure to stderr with its category, cause and hint.
pub(crate) fn report_error(error: &ConventionGuardError) {
    print_error_full(
        error.error_type(),
        &error.to_string(),
        error.detail().as_deref(),
        error.suggestion(),
    );
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
