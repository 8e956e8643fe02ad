pub(crate) mod all;
pub(crate) mod level;
pub(crate) mod system;

pub(crate) use all::All;
pub(crate) use level::Level;
pub(crate) use system::System;

use findgit_core::error::{ExitCode, Fallible};
use findgit_core::PathList;

/// How discovered directories are printed.
#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// One directory per line
    Human,
    /// The `;`-separated list, as a configuration lookup consumes it
    Plain,
}

/// A findgit command.
pub(crate) trait Command: Sized {
    /// Executes the command. Returns `Ok(ExitCode::Success)` if the process
    /// succeeded, `Ok(code)` with a different exit code to exit early with
    /// that code, and `Err(e)` if the process failed.
    fn run(self, format: Format) -> Fallible<ExitCode>;
}

/// Renders `dirs` for printing, or `None` when the list is empty in human format.
pub(crate) fn render(dirs: &PathList, format: Format) -> Option<String> {
    match format {
        Format::Plain => Some(dirs.to_string()),
        Format::Human if dirs.is_empty() => None,
        Format::Human => Some(dirs.iter().collect::<Vec<_>>().join("\n")),
    }
}
