//! Locates configuration directories from environment variable templates.

use log::{debug, warn};

use crate::buffer::FixedPathBuf;
use crate::convert::to_posix_utf8;
use crate::env::{expand_into, PERCENT};
use crate::error::Fallible;
use crate::host::Host;
use crate::list::PathList;

/// Candidate home directories, holding the global `.gitconfig`.
pub const GLOBAL_TEMPLATES: &[&str] = &[r"%HOME%\", r"%HOMEDRIVE%%HOMEPATH%\", r"%USERPROFILE%\"];

/// Candidate XDG-style `git` configuration directories.
pub const XDG_TEMPLATES: &[&str] = &[
    r"%XDG_CONFIG_HOME%\git",
    r"%APPDATA%\git",
    r"%LOCALAPPDATA%\git",
    r"%HOME%\.config\git",
    r"%HOMEDRIVE%%HOMEPATH%\.config\git",
    r"%USERPROFILE%\.config\git",
];

/// The machine-wide Git directory under ProgramData.
pub const PROGRAMDATA_TEMPLATES: &[&str] = &[r"%PROGRAMDATA%\Git"];

/// Expands each template in order and collects the results that exist.
///
/// A template is dropped when its expansion does not fit in a path buffer,
/// still starts with `%` (the variable it references is unset), or names a
/// path that does not exist. A path that is not valid Unicode is skipped with a
/// warning.
pub(crate) fn find_existing_dirs<H>(host: &H, templates: &[&str]) -> Fallible<PathList>
where
    H: Host + ?Sized,
{
    let mut out = PathList::new();
    let mut path = FixedPathBuf::new();

    for template in templates {
        let needed = expand_into(host, template, &mut path);
        if needed == 0 || needed > path.capacity() {
            debug!("Skipping {}: expansion does not fit in a path", template);
            continue;
        }

        if path.as_wide().first() == Some(&PERCENT) {
            continue;
        }

        if !host.exists(path.as_wide()) {
            continue;
        }

        match to_posix_utf8(path.as_wide()) {
            Ok(dir) => out.push(&dir)?,
            Err(_) => warn!("Skipping {}: {} is not valid Unicode", template, path),
        }
    }

    Ok(out)
}
