mod cli;
mod command;

use clap::Parser;

use findgit_core::error::report_error;
use findgit_core::log::{LogVerbosity, Logger};

/// The entry point for the `findgit` CLI.
pub fn main() {
    let findgit = cli::Findgit::parse();

    let verbosity = match (&findgit.verbose, &findgit.quiet) {
        (false, false) => LogVerbosity::Default,
        (true, false) => LogVerbosity::Verbose,
        (false, true) => LogVerbosity::Quiet,
        (true, true) => {
            unreachable!("Clap should prevent the user from providing both --verbose and --quiet")
        }
    };
    Logger::init(verbosity).expect("Only a single logger should be initialized");

    let exit_code = findgit.run().unwrap_or_else(|err| {
        report_error(&err);
        err.exit_code()
    });

    exit_code.exit();
}
