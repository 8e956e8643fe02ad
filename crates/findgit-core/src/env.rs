//! Provides the environment variable names findgit reads, and template expansion.

use crate::buffer::FixedPathBuf;
use crate::host::Host;

/// The search path walked for Git executables.
pub const PATH: &str = "PATH";

/// Overrides the log level, e.g. `debug`.
pub const FINDGIT_LOGLEVEL: &str = "FINDGIT_LOGLEVEL";

pub(crate) const PERCENT: u16 = b'%' as u16;

/// Expands `%NAME%` references in `template` and writes the result into `buf`.
///
/// Returns the number of slots the full expansion needs, including the
/// terminator. When that exceeds `buf`'s capacity, `buf` is left empty.
///
/// A reference to an unset variable is kept verbatim, `%` signs included, and
/// a `%` without a closing `%` is copied along with the rest of the template.
pub fn expand_into<H>(host: &H, template: &str, buf: &mut FixedPathBuf) -> usize
where
    H: Host + ?Sized,
{
    let template: Vec<u16> = template.encode_utf16().collect();
    let expanded = expand(host, &template);
    let needed = expanded.len() + 1;

    if !buf.set_from(&expanded) {
        buf.clear();
    }

    needed
}

fn expand<H>(host: &H, template: &[u16]) -> Vec<u16>
where
    H: Host + ?Sized,
{
    let mut out = Vec::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.iter().position(|&c| c == PERCENT) {
        let after = &rest[open + 1..];
        let close = match after.iter().position(|&c| c == PERCENT) {
            Some(close) => close,
            None => break,
        };

        out.extend_from_slice(&rest[..open]);
        match lookup(host, &after[..close]) {
            Some(value) => out.extend_from_slice(&value),
            None => out.extend_from_slice(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.extend_from_slice(rest);
    out
}

fn lookup<H>(host: &H, name: &[u16]) -> Option<Vec<u16>>
where
    H: Host + ?Sized,
{
    if name.is_empty() {
        return None;
    }

    let name = String::from_utf16(name).ok()?;
    host.var(&name)
}
