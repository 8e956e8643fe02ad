use log::info;

use super::{render, Command, Format};
use findgit_core::error::{ExitCode, Fallible};
use findgit_core::find::SYSTEM_CONFIG_SUBDIR;
use findgit_core::find_system_dirs;

#[derive(clap::Args)]
pub(crate) struct System {
    /// Subdirectory to append to each install root, e.g. `share\git-core\templates\`
    #[arg(long, value_name = "SUBDIR", default_value = SYSTEM_CONFIG_SUBDIR)]
    subdir: String,
}

impl Command for System {
    fn run(self, format: Format) -> Fallible<ExitCode> {
        let dirs = find_system_dirs(&self.subdir)?;

        match render(&dirs, format) {
            Some(output) => println!("{}", output),
            None => info!("No Git installation found"),
        }

        Ok(ExitCode::Success)
    }
}
