//! Locates Git through the executables on `PATH`.

use log::debug;

use crate::buffer::{FixedPathBuf, MAX_PATH};
use crate::convert::to_posix_utf8;
use crate::env;
use crate::error::{ErrorKind, Fallible};
use crate::host::Host;
use crate::walk::SearchPath;

const BACKSLASH: u16 = b'\\' as u16;
const SLASH: u16 = b'/' as u16;

/// Length of the leaf directory replaced by the subdirectory, separator included.
const LEAF_LEN: usize = 4;

fn is_separator(ch: u16) -> bool {
    ch == BACKSLASH || ch == SLASH
}

/// Git for Windows puts its executables in `bin\` or `cmd\` directly under the
/// install root. The leaf directory of `dir` (which ends in a separator) must
/// have that shape for the install root to be reached by cutting it off.
fn has_install_leaf(dir: &[u16]) -> bool {
    let len = dir.len();

    len > LEAF_LEN + 1
        && is_separator(dir[len - 1])
        && is_separator(dir[len - LEAF_LEN - 1])
        && !dir[len - LEAF_LEN..len - 1].iter().any(|&c| is_separator(c))
}

/// Finds the first directory on `PATH` containing `exe_name`, and returns the
/// install root derived from it with `subdir` appended.
///
/// For example, with `C:\Tools\bin` on `PATH` and `C:\Tools\bin\git.exe`
/// present, a `subdir` of `etc\` yields `C:/Tools/etc/`.
pub(crate) fn find_in_path<H>(host: &H, exe_name: &str, subdir: &str) -> Fallible<String>
where
    H: Host + ?Sized,
{
    let path = host.var(env::PATH).ok_or(ErrorKind::PathVariableUnset)?;
    let exe: Vec<u16> = exe_name.encode_utf16().collect();
    let subdir: Vec<u16> = subdir.encode_utf16().collect();

    let mut entries = SearchPath::new(&path);
    let mut root = FixedPathBuf::new();

    // Walking with one slot less than the buffer holds leaves room for the trailing separator
    while entries.next_into(&mut root, MAX_PATH - 1)? && !root.is_empty() {
        if !matches!(root.last(), Some(ch) if is_separator(ch)) && !root.push(BACKSLASH) {
            continue;
        }

        let dir_len = root.len();
        if !root.extend_from(&exe) {
            debug!("Skipping search path entry too long to hold {}: {}", exe_name, root);
            continue;
        }

        if !host.exists(root.as_wide()) {
            continue;
        }

        if !has_install_leaf(&root.as_wide()[..dir_len]) {
            debug!(
                "Ignoring {}: its directory is not a bin or cmd directory of an install root",
                root
            );
            continue;
        }

        root.truncate(dir_len - LEAF_LEN);
        if !root.extend_from(&subdir) {
            debug!("Ignoring {}: appending the subdirectory is too long", root);
            continue;
        }

        debug!("Found {} on the search path, using {}", exe_name, root);
        return to_posix_utf8(root.as_wide());
    }

    Err(ErrorKind::ExecutableNotFound {
        name: exe_name.to_string(),
    }
    .into())
}
