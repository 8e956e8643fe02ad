//! Discovery of Git for Windows installation and configuration directories.
//!
//! Each operation consults one or more sources in a fixed priority order and
//! joins everything they find into a single [`PathList`]. A source that finds
//! nothing is skipped, so an empty list is a successful result; only a failure
//! to allocate the list is reported as an error.

use std::fmt;

use log::{debug, warn};

use crate::error::Fallible;
use crate::host::{Hive, Host, SystemHost};
use crate::list::PathList;

mod existing;
mod path;
mod registry;

pub use existing::{GLOBAL_TEMPLATES, PROGRAMDATA_TEMPLATES, XDG_TEMPLATES};
pub use registry::{MACHINE_UNINSTALL_KEY, UNINSTALL_KEY};

const GIT_EXE: &str = "git.exe";
const GIT_CMD: &str = "git.cmd";

/// Subdirectory of the install root holding the system configuration.
pub const SYSTEM_CONFIG_SUBDIR: &str = r"etc\";

/// Subdirectory of the install root holding the repository templates.
pub const TEMPLATE_SUBDIR: &str = r"share\git-core\templates\";

/// The directory levels a configuration lookup asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SysDir {
    /// The system configuration directory of each Git installation
    System,
    /// The user's home directories
    Global,
    /// The user's XDG-style configuration directories
    Xdg,
    /// The machine-wide ProgramData directory
    ProgramData,
    /// The repository template directory of each Git installation
    Template,
}

impl SysDir {
    pub const ALL: [SysDir; 5] = [
        SysDir::System,
        SysDir::Global,
        SysDir::Xdg,
        SysDir::ProgramData,
        SysDir::Template,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SysDir::System => "system",
            SysDir::Global => "global",
            SysDir::Xdg => "xdg",
            SysDir::ProgramData => "programdata",
            SysDir::Template => "template",
        }
    }
}

impl fmt::Display for SysDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs directory discovery against a [`Host`].
pub struct Finder<H> {
    host: H,
}

impl<H: Host> Finder<H> {
    pub fn new(host: H) -> Self {
        Finder { host }
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    /// Finds the install roots of Git, with `subdir` appended to each.
    ///
    /// Sources, in order: `git.exe` on `PATH`, `git.cmd` on `PATH`, the
    /// per-user uninstall entry, and the per-machine uninstall entry.
    pub fn system_dirs(&self, subdir: &str) -> Fallible<PathList> {
        let found = [
            path::find_in_path(&self.host, GIT_EXE, subdir),
            path::find_in_path(&self.host, GIT_CMD, subdir),
            registry::find_in_registry(&self.host, Hive::CurrentUser, UNINSTALL_KEY, subdir),
            registry::find_in_registry(
                &self.host,
                Hive::LocalMachine,
                MACHINE_UNINSTALL_KEY,
                subdir,
            ),
        ];

        let mut out = PathList::new();
        for result in found {
            match result {
                Ok(dir) => out.push(&dir)?,
                Err(err) if err.kind().is_not_found() => debug!("{}", err),
                Err(err) => warn!("Skipping a Git installation: {}", err),
            }
        }

        Ok(out)
    }

    /// Finds the user's home directories.
    pub fn global_dirs(&self) -> Fallible<PathList> {
        existing::find_existing_dirs(&self.host, GLOBAL_TEMPLATES)
    }

    /// Finds the user's XDG-style `git` configuration directories.
    pub fn xdg_dirs(&self) -> Fallible<PathList> {
        existing::find_existing_dirs(&self.host, XDG_TEMPLATES)
    }

    /// Finds the machine-wide `Git` directory under ProgramData.
    pub fn programdata_dirs(&self) -> Fallible<PathList> {
        existing::find_existing_dirs(&self.host, PROGRAMDATA_TEMPLATES)
    }

    pub fn find(&self, level: SysDir) -> Fallible<PathList> {
        match level {
            SysDir::System => self.system_dirs(SYSTEM_CONFIG_SUBDIR),
            SysDir::Global => self.global_dirs(),
            SysDir::Xdg => self.xdg_dirs(),
            SysDir::ProgramData => self.programdata_dirs(),
            SysDir::Template => self.system_dirs(TEMPLATE_SUBDIR),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        fn system_finder() -> Fallible<Finder<SystemHost>> {
            Ok(Finder::new(SystemHost))
        }
    } else {
        fn system_finder() -> Fallible<Finder<SystemHost>> {
            Err(crate::error::ErrorKind::UnsupportedPlatform.into())
        }
    }
}

/// Finds the install roots of Git on this machine, with `subdir` appended to each.
pub fn find_system_dirs(subdir: &str) -> Fallible<PathList> {
    system_finder()?.system_dirs(subdir)
}

/// Finds the current user's home directories.
pub fn find_global_dirs() -> Fallible<PathList> {
    system_finder()?.global_dirs()
}

/// Finds the current user's XDG-style `git` configuration directories.
pub fn find_xdg_dirs() -> Fallible<PathList> {
    system_finder()?.xdg_dirs()
}

/// Finds the machine-wide `Git` directory under ProgramData.
pub fn find_programdata_dirs() -> Fallible<PathList> {
    system_finder()?.programdata_dirs()
}

/// Finds the directories for a single level on this machine.
pub fn find_sysdir(level: SysDir) -> Fallible<PathList> {
    system_finder()?.find(level)
}
