use tracing::debug;

use crate::EXIT_CONFIG_ERROR;
use crate::cli::{CheckArgs, Cli};
use crate::commands::context::{load_config, report_error, write_output};
use crate::scanner::resolve_root;

use super::check_exit::determine_exit_code;
use super::check_output::format_output;
use super::plan::{CheckRunner, RuleSelection};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Resolve the tree to check
    let root = resolve_root(&args.root)?;
    debug!(root = %root.display(), "resolved root");

    // 2. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config, &root)?;
    let config = loaded.config;

    // 3. Select rules
    let selection = RuleSelection::new(&args.only, &args.skip, &config)?;

    // 4. Run every selected rule
    let report = CheckRunner::new(root, &config, selection).run();

    // 5. Format and write output
    let output = format_output(args.format, &report, cli.color.into(), cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(determine_exit_code(&report))
}
