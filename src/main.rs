//! `dotem` binary entry point.
use std::process::ExitCode;

use clap::Parser;

use dotem::cli::Cli;
use dotem::commands;
use dotem::logging::{self, Logger};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args.command.name();

    logging::init_subscriber(args.verbose, command);
    let log = Logger::new(command);

    match commands::dispatch(&args.command, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log.error(&format!("{err:#}"));
            if let Some(path) = log.log_path() {
                log.info(&format!("log written to {}", path.display()));
            }
            ExitCode::FAILURE
        }
    }
}
