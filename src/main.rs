use clap::Parser;

use convention_guard::cli::{Cli, Commands};
use convention_guard::commands::{run_check, run_classify, run_config, run_init};
use convention_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Classify(args) => run_classify(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
