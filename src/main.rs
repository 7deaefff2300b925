use clap::Parser;
use snapcheck::cli::{self, Cli};
use snapcheck::init_logging;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.log_json)?;

    cli::run(cli)
}
