//! A fixed-capacity wide-character buffer holding a single OS path.

use std::fmt;

/// Number of UTF-16 slots in a path buffer, including the terminating NUL.
pub const MAX_PATH: usize = 260;

/// A stack-allocated path buffer with a fixed capacity of [`MAX_PATH`] slots.
///
/// The buffer always keeps a NUL terminator at index `len`, so at most
/// `MAX_PATH - 1` characters of path data fit. Every mutating operation is
/// all-or-nothing: when the result would not fit, the contents are left as
/// they were and `false` is returned.
#[derive(Clone)]
pub struct FixedPathBuf {
    data: [u16; MAX_PATH],
    len: usize,
}

impl FixedPathBuf {
    pub fn new() -> Self {
        FixedPathBuf {
            data: [0; MAX_PATH],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        MAX_PATH
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The path data, without the terminator.
    pub fn as_wide(&self) -> &[u16] {
        &self.data[..self.len]
    }

    pub fn last(&self) -> Option<u16> {
        self.as_wide().last().copied()
    }

    #[must_use]
    pub fn push(&mut self, ch: u16) -> bool {
        self.extend_from(&[ch])
    }

    #[must_use]
    pub fn extend_from(&mut self, wide: &[u16]) -> bool {
        let end = self.len + wide.len();
        if end >= MAX_PATH {
            return false;
        }

        self.data[self.len..end].copy_from_slice(wide);
        self.data[end] = 0;
        self.len = end;
        true
    }

    #[must_use]
    pub fn set_from(&mut self, wide: &[u16]) -> bool {
        if wide.len() >= MAX_PATH {
            return false;
        }

        self.clear();
        self.extend_from(wide)
    }

    /// Shortens the path to `len` characters. Has no effect if `len` is not shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.data[len] = 0;
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Raw access to every slot, for writers that terminate their own output.
    /// Must be followed by [`FixedPathBuf::sync_len`].
    pub(crate) fn slots_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    pub(crate) fn sync_len(&mut self) {
        self.len = self
            .data
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(MAX_PATH - 1);
        self.data[self.len] = 0;
    }
}

impl Default for FixedPathBuf {
    fn default() -> Self {
        FixedPathBuf::new()
    }
}

impl fmt::Debug for FixedPathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedPathBuf")
            .field(&String::from_utf16_lossy(self.as_wide()))
            .finish()
    }
}

impl fmt::Display for FixedPathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf16_lossy(self.as_wide()))
    }
}
