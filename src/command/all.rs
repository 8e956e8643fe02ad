use log::info;

use super::{render, Command, Format};
use findgit_core::error::{ExitCode, Fallible};
use findgit_core::{find_sysdir, SysDir};

/// Prints the directories of every level, labelled by level.
pub(crate) struct All;

impl Command for All {
    fn run(self, format: Format) -> Fallible<ExitCode> {
        for level in SysDir::ALL.iter() {
            let dirs = find_sysdir(*level)?;

            match format {
                Format::Plain => println!("{}\t{}", level, dirs),
                Format::Human => match render(&dirs, format) {
                    Some(output) => {
                        println!("{}:", level);
                        for dir in output.lines() {
                            println!("    {}", dir);
                        }
                    }
                    None => info!("No {} directories found", level),
                },
            }
        }

        Ok(ExitCode::Success)
    }
}
