//! The operating system services that directory discovery depends on.
//!
//! Discovery reads environment variables, checks whether paths exist and
//! queries the registry. Those probes go through the [`Host`] trait, so the
//! discovery logic runs unchanged against the real system ([`SystemHost`]) or
//! an in-memory stand-in.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::Path;

#[cfg(test)]
pub(crate) mod mock;

/// A top-level registry root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hive {
    CurrentUser,
    LocalMachine,
}

impl fmt::Display for Hive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Hive::CurrentUser => "HKEY_CURRENT_USER",
            Hive::LocalMachine => "HKEY_LOCAL_MACHINE",
        })
    }
}

/// The declared type of a registry value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    /// `REG_SZ`
    String,
    /// `REG_EXPAND_SZ`
    ExpandString,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryValue {
    pub kind: ValueType,
    /// The value's characters, without a trailing NUL.
    pub data: Vec<u16>,
}

/// An open registry key. The underlying handle is released when the key is dropped.
pub trait RegistryKey {
    fn query_value(&self, name: &str) -> io::Result<RegistryValue>;
}

pub trait Host {
    type Key: RegistryKey;

    /// Reads an environment variable as wide characters.
    fn var(&self, name: &str) -> Option<Vec<u16>>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &[u16]) -> bool;

    /// Opens `path` under `hive` for reading.
    fn open_key(&self, hive: Hive, path: &str) -> io::Result<Self::Key>;
}

/// The host process's own environment, filesystem and registry.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    type Key = SystemKey;

    fn var(&self, name: &str) -> Option<Vec<u16>> {
        std::env::var_os(name).map(|value| encode_wide(&value))
    }

    fn exists(&self, path: &[u16]) -> bool {
        Path::new(&decode_wide(path)).exists()
    }

    fn open_key(&self, hive: Hive, path: &str) -> io::Result<SystemKey> {
        open_system_key(hive, path)
    }
}

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        use std::os::windows::ffi::{OsStrExt, OsStringExt};
        use winreg::enums::{RegType, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ};
        use winreg::RegKey;

        fn encode_wide(value: &OsStr) -> Vec<u16> {
            value.encode_wide().collect()
        }

        fn decode_wide(path: &[u16]) -> OsString {
            OsString::from_wide(path)
        }

        /// A registry key opened with `KEY_READ`.
        pub struct SystemKey(RegKey);

        fn open_system_key(hive: Hive, path: &str) -> io::Result<SystemKey> {
            let root = match hive {
                Hive::CurrentUser => HKEY_CURRENT_USER,
                Hive::LocalMachine => HKEY_LOCAL_MACHINE,
            };

            RegKey::predef(root)
                .open_subkey_with_flags(path, KEY_READ)
                .map(SystemKey)
        }

        impl RegistryKey for SystemKey {
            fn query_value(&self, name: &str) -> io::Result<RegistryValue> {
                let raw = self.0.get_raw_value(name)?;
                let kind = match raw.vtype {
                    RegType::REG_SZ => ValueType::String,
                    RegType::REG_EXPAND_SZ => ValueType::ExpandString,
                    _ => ValueType::Other,
                };

                let mut data: Vec<u16> = raw
                    .bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                if let Some(nul) = data.iter().position(|&c| c == 0) {
                    data.truncate(nul);
                }

                Ok(RegistryValue { kind, data })
            }
        }
    } else {
        fn encode_wide(value: &OsStr) -> Vec<u16> {
            value.to_string_lossy().encode_utf16().collect()
        }

        fn decode_wide(path: &[u16]) -> OsString {
            OsString::from(String::from_utf16_lossy(path))
        }

        /// Placeholder key type; there is no registry on this platform.
        pub struct SystemKey {
            _private: (),
        }

        fn open_system_key(_hive: Hive, _path: &str) -> io::Result<SystemKey> {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "the registry is not available on this platform",
            ))
        }

        impl RegistryKey for SystemKey {
            fn query_value(&self, _name: &str) -> io::Result<RegistryValue> {
                Err(io::ErrorKind::Unsupported.into())
            }
        }
    }
}
