use std::fmt::Write;

use crate::checker::ProjectClassifier;
use crate::cli::{ClassifyArgs, Cli};
use crate::output::display_path;
use crate::scanner::{DirectoryScanner, FileScanner, MarkerFilter, resolve_root};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, report_error, write_output};

#[must_use]
pub fn run_classify(args: &ClassifyArgs, cli: &Cli) -> i32 {
    match run_classify_impl(args, cli) {
        Ok(output) => match write_output(None, &output, cli.quiet) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                report_error(&e);
                EXIT_CONFIG_ERROR
            }
        },
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Lists every project file under the root with the kind it is checked as.
///
/// # Errors
/// Returns an error if the root or configuration is invalid, or no project files exist.
pub(crate) fn run_classify_impl(args: &ClassifyArgs, cli: &Cli) -> Result<String> {
    let root = resolve_root(&args.root)?;
    let config = load_config(args.config.as_deref(), cli.no_config, &root)?.config;

    let filter = MarkerFilter::new(config.scanner.exclude_markers.as_slice());
    let projects = DirectoryScanner::new(filter).discover(&root, &config.target_framework.pattern)?;
    let classifier = ProjectClassifier::new(&config.classification);

    let mut output = String::new();
    for path in projects.iter() {
        let kind = classifier.classify(projects.relative(path));
        writeln!(
            output,
            "{:<8}  {}",
            kind.as_str(),
            display_path(path, Some(&root))
        )
        .ok();
    }
    Ok(output)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
