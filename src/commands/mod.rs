pub mod check;
pub mod classify;
pub mod config;
pub(crate) mod context;
pub mod init;

pub use check::run_check;
pub use classify::run_classify;
pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
