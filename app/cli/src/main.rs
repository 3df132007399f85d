//! FILENAME: app/cli/src/main.rs
// PURPOSE: Command-line entry point.

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = app_lib::Cli::parse();
    app_lib::logging::init(cli.verbose);

    match app_lib::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!(target: "SYS", "{:?}", e);
            eprintln!("{}: {}", app_lib::FAILURE_PREFIX, e);
            ExitCode::FAILURE
        }
    }
}
