//! Conversion of wide-character OS paths into UTF-8 with forward slashes.

use crate::error::{Context, ErrorKind, Fallible};

/// Converts a wide path to UTF-8, replacing every `\` with `/`.
pub fn to_posix_utf8(wide: &[u16]) -> Fallible<String> {
    let path = String::from_utf16(wide).with_context(|| ErrorKind::PathConversion)?;
    Ok(mkposix(path))
}

fn mkposix(path: String) -> String {
    if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path
    }
}
