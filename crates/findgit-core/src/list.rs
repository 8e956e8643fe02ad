//! The joined list of directories returned by every discovery operation.

use std::fmt;

use crate::error::{Context, ErrorKind, Fallible};

/// Separates directories in a [`PathList`].
pub const PATH_LIST_SEPARATOR: char = ';';

/// An ordered list of directories joined by [`PATH_LIST_SEPARATOR`].
///
/// Directories appear in the order their sources were consulted. The list
/// never has a leading or trailing separator, and an empty list means that
/// nothing was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathList {
    joined: String,
}

impl PathList {
    pub fn new() -> Self {
        PathList::default()
    }

    /// Appends `dir`, separated from any previous entry by exactly one separator.
    ///
    /// Leading separators are stripped from `dir` even when the list is empty, so
    /// the list never starts with one. Empty directories are ignored. Fails only
    /// if memory for the list cannot be allocated.
    pub fn push(&mut self, dir: &str) -> Fallible<()> {
        let dir = dir.trim_start_matches(PATH_LIST_SEPARATOR);
        if dir.is_empty() {
            return Ok(());
        }

        let need_separator =
            !self.joined.is_empty() && !self.joined.ends_with(PATH_LIST_SEPARATOR);
        self.joined
            .try_reserve(dir.len() + usize::from(need_separator))
            .with_context(|| ErrorKind::OutOfMemory)?;

        if need_separator {
            self.joined.push(PATH_LIST_SEPARATOR);
        }
        self.joined.push_str(dir);
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.joined
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }

    /// Iterates over the directories in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.joined
            .split(PATH_LIST_SEPARATOR)
            .filter(|dir| !dir.is_empty())
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_separator() {
        let mut list = PathList::new();
        list.push("C:/Git/etc/").unwrap();
        list.push("D:/Git/etc/").unwrap();

        assert_eq!(list.as_str(), "C:/Git/etc/;D:/Git/etc/");
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["C:/Git/etc/", "D:/Git/etc/"]
        );
    }

    #[test]
    fn skips_empty_directories() {
        let mut list = PathList::new();
        list.push("").unwrap();
        list.push("C:/a").unwrap();
        list.push("").unwrap();

        assert_eq!(list.as_str(), "C:/a");
    }

    #[test]
    fn does_not_double_separators() {
        let mut list = PathList::new();
        list.push(";C:/a").unwrap();
        list.push(";;C:/b").unwrap();

        assert_eq!(list.to_string(), "C:/a;C:/b");
    }

    #[test]
    fn first_entry_loses_leading_separators() {
        let mut list = PathList::new();
        list.push(";;C:/a").unwrap();

        assert_eq!(list.as_str(), "C:/a");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["C:/a"]);
    }

    #[test]
    fn empty_list() {
        let list = PathList::new();

        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.to_string(), "");
    }
}
