//! This is the main entry point for the DataDetective triage tool.
//!
//! The program checks a disk image, prints its partition table or lists the files of a
//! partition, depending on the action flags. It exits with status 0 on success and 1 on any
//! failure, including usage errors.

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use data_detective::cli::Args;
use data_detective::constants::BANNER;
use data_detective::{Config, LocalRunner, Triage};
use log::{debug, error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let status = match err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            // Writes to stdout for help/version and to stderr otherwise.
            let _ = err.print();
            return status;
        }
    };

    if let Err(err) = stderrlog::new()
        .module(module_path!())
        .verbosity(usize::from(args.verbose))
        .init()
    {
        eprintln!("Failed to initialise logging: {err}");
    }

    println!("{BANNER}");

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let triage = Triage::new(LocalRunner, &config);
    match triage.run(&config) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{:?} failure", err.kind());
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
