//! Splits a `;`-separated search path, such as the value of `PATH`, into its entries.

use crate::buffer::FixedPathBuf;
use crate::error::{ErrorKind, Fallible};

const QUOTE: u16 = b'"' as u16;
const SEPARATOR: u16 = b';' as u16;

/// Copies the next entry of `path` into `buf` and returns the offset of the entry after it.
///
/// An entry starting with `"` runs to the closing quote, so it may contain `;`.
/// Any other entry runs to the next `;`. The copy stops early at the end of the
/// input, at a NUL, or when `buf` has a single slot left, which is always used
/// for the terminator. Overlong entries are truncated silently.
///
/// Returns `Ok(None)` when nothing was consumed, i.e. the input is exhausted.
pub fn walk_path(path: &[u16], buf: &mut [u16]) -> Fallible<Option<usize>> {
    if buf.is_empty() {
        return Err(ErrorKind::InvalidArgument { name: "buf" }.into());
    }

    let at = |i: usize| path.get(i).copied().unwrap_or(0);
    let mut pos = 0;

    let term = if at(pos) == QUOTE {
        pos += 1;
        QUOTE
    } else {
        SEPARATOR
    };

    let room = buf.len() - 1;
    let mut written = 0;
    while at(pos) != 0 && at(pos) != term && written < room {
        buf[written] = at(pos);
        written += 1;
        pos += 1;
    }
    buf[written] = 0;

    while at(pos) == term || at(pos) == SEPARATOR {
        pos += 1;
    }

    Ok(if pos != 0 { Some(pos) } else { None })
}

/// A cursor over the entries of a search path.
pub struct SearchPath<'a> {
    rest: &'a [u16],
}

impl<'a> SearchPath<'a> {
    pub fn new(path: &'a [u16]) -> Self {
        SearchPath { rest: path }
    }

    /// Writes the next entry into `buf`, using at most `limit` slots including the terminator.
    ///
    /// Returns `Ok(false)` once the search path is exhausted.
    pub fn next_into(&mut self, buf: &mut FixedPathBuf, limit: usize) -> Fallible<bool> {
        let limit = limit.min(buf.capacity());
        let walked = walk_path(self.rest, &mut buf.slots_mut()[..limit]);
        buf.sync_len();

        match walked? {
            Some(consumed) => {
                self.rest = &self.rest[consumed..];
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
