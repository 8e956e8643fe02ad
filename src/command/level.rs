use log::info;

use super::{render, Command, Format};
use findgit_core::error::{ExitCode, Fallible};
use findgit_core::{find_sysdir, SysDir};

/// Prints the directories of a single level.
pub(crate) struct Level(pub(crate) SysDir);

impl Command for Level {
    fn run(self, format: Format) -> Fallible<ExitCode> {
        let dirs = find_sysdir(self.0)?;

        match render(&dirs, format) {
            Some(output) => println!("{}", output),
            None => info!("No {} directories found", self.0),
        }

        Ok(ExitCode::Success)
    }
}
