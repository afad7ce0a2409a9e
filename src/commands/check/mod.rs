mod check_exit;
mod check_output;
mod plan;
mod runner;

pub use check_exit::determine_exit_code;
pub use plan::{CheckRunner, RuleSelection, known_rule_ids};
pub use runner::run_check;

#[cfg(test)]
pub(crate) use check_output::format_output;
#[cfg(test)]
pub(crate) use runner::run_check_impl;

#[cfg(test)]
mod check_output_tests;
#[cfg(test)]
mod check_plan_tests;
