//! An in-memory host for exercising discovery without touching the real system.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::rc::Rc;

use super::{Hive, Host, RegistryKey, RegistryValue, ValueType};

#[derive(Default)]
pub(crate) struct MockHost {
    vars: HashMap<String, Vec<u16>>,
    paths: HashSet<String>,
    keys: HashMap<(Hive, String), Option<RegistryValue>>,
    open_handles: Rc<Cell<usize>>,
    opened: Rc<Cell<usize>>,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        MockHost::default()
    }

    pub(crate) fn with_var(self, name: &str, value: &str) -> Self {
        self.with_wide_var(name, value.encode_utf16().collect())
    }

    /// Sets a variable to raw UTF-16, which need not be valid Unicode.
    pub(crate) fn with_wide_var(mut self, name: &str, value: Vec<u16>) -> Self {
        self.vars.insert(name.to_string(), value);
        self
    }

    /// Marks `path` as existing. Paths are compared verbatim.
    pub(crate) fn with_path(mut self, path: &str) -> Self {
        self.paths.insert(path.to_string());
        self
    }

    /// Adds a key without an `InstallLocation` value.
    pub(crate) fn with_key(mut self, hive: Hive, key: &str) -> Self {
        self.keys.insert((hive, key.to_string()), None);
        self
    }

    pub(crate) fn with_value(self, hive: Hive, key: &str, kind: ValueType, data: &str) -> Self {
        self.with_wide_value(hive, key, kind, data.encode_utf16().collect())
    }

    pub(crate) fn with_wide_value(
        mut self,
        hive: Hive,
        key: &str,
        kind: ValueType,
        data: Vec<u16>,
    ) -> Self {
        let value = RegistryValue { kind, data };
        self.keys.insert((hive, key.to_string()), Some(value));
        self
    }

    pub(crate) fn with_install_location(self, hive: Hive, key: &str, location: &str) -> Self {
        self.with_value(hive, key, ValueType::String, location)
    }

    /// Number of registry keys currently open.
    pub(crate) fn open_handles(&self) -> usize {
        self.open_handles.get()
    }

    /// Number of registry keys opened so far.
    pub(crate) fn opened(&self) -> usize {
        self.opened.get()
    }
}

pub(crate) struct MockKey {
    value: Option<RegistryValue>,
    open_handles: Rc<Cell<usize>>,
}

impl RegistryKey for MockKey {
    fn query_value(&self, name: &str) -> io::Result<RegistryValue> {
        match (&self.value, name) {
            (Some(value), "InstallLocation") => Ok(value.clone()),
            _ => Err(io::ErrorKind::NotFound.into()),
        }
    }
}

impl Drop for MockKey {
    fn drop(&mut self) {
        self.open_handles.set(self.open_handles.get() - 1);
    }
}

impl Host for MockHost {
    type Key = MockKey;

    fn var(&self, name: &str) -> Option<Vec<u16>> {
        self.vars.get(name).cloned()
    }

    fn exists(&self, path: &[u16]) -> bool {
        self.paths.contains(&String::from_utf16_lossy(path))
    }

    fn open_key(&self, hive: Hive, path: &str) -> io::Result<MockKey> {
        let value = self
            .keys
            .get(&(hive, path.to_string()))
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;

        self.open_handles.set(self.open_handles.get() + 1);
        self.opened.set(self.opened.get() + 1);

        Ok(MockKey {
            value: value.clone(),
            open_handles: Rc::clone(&self.open_handles),
        })
    }
}
