//! Locates Git through the install location recorded by its installer.

use log::{debug, warn};

use crate::buffer::FixedPathBuf;
use crate::convert::to_posix_utf8;
use crate::error::{Context, ErrorKind, Fallible};
use crate::host::{Hive, Host, RegistryKey, ValueType};

// These need to match the uninstall entry written by the Git for Windows installer
pub const UNINSTALL_KEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall\Git_is1";
const INSTALL_LOCATION: &str = "InstallLocation";

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// The per-machine uninstall entry, which 64-bit processes see under `Wow6432Node`.
        pub const MACHINE_UNINSTALL_KEY: &str =
            r"SOFTWARE\Wow6432Node\Microsoft\Windows\CurrentVersion\Uninstall\Git_is1";
    } else {
        /// The per-machine uninstall entry.
        pub const MACHINE_UNINSTALL_KEY: &str = UNINSTALL_KEY;
    }
}

/// Reads the `InstallLocation` string stored under `hive\key` and appends `subdir`.
///
/// A missing key or value, a value that is not a plain string, and a value
/// too long to take the suffix are all reported as
/// [`ErrorKind::InstallLocationNotFound`]. A value that exists but cannot be
/// used is also logged as a warning.
pub(crate) fn find_in_registry<H>(
    host: &H,
    hive: Hive,
    key: &str,
    subdir: &str,
) -> Fallible<String>
where
    H: Host + ?Sized,
{
    let not_found = || ErrorKind::InstallLocationNotFound {
        hive,
        key: key.to_string(),
    };

    let handle = host.open_key(hive, key).with_context(not_found)?;
    let value = handle
        .query_value(INSTALL_LOCATION)
        .with_context(not_found)?;

    if value.kind != ValueType::String {
        warn!(
            "Ignoring the Git install location in {}\\{}: {} is not a plain string value",
            hive, key, INSTALL_LOCATION
        );
        return Err(not_found().into());
    }

    let subdir: Vec<u16> = subdir.encode_utf16().collect();
    let mut path = FixedPathBuf::new();
    if !path.set_from(&value.data) || !path.extend_from(&subdir) {
        warn!(
            "Ignoring the Git install location in {}\\{}: the path is too long",
            hive, key
        );
        return Err(not_found().into());
    }

    debug!("Found Git install location {} in {}\\{}", path, hive, key);
    to_posix_utf8(path.as_wide())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::MAX_PATH;
    use crate::host::mock::MockHost;
    use crate::log::capture::logged;
    use log::Level;

    fn assert_not_found(result: Fallible<String>, hive: Hive) {
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::InstallLocationNotFound {
                hive,
                key: UNINSTALL_KEY.to_string()
            }
        );
    }

    #[test]
    fn appends_subdir_to_install_location() {
        let host = MockHost::new().with_install_location(
            Hive::CurrentUser,
            UNINSTALL_KEY,
            r"C:\Program Files\Git\",
        );

        assert_eq!(
            find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\").unwrap(),
            "C:/Program Files/Git/etc/"
        );
        assert_eq!(host.open_handles(), 0);
    }

    #[test]
    fn missing_key_is_not_found() {
        let host = MockHost::new().with_install_location(
            Hive::LocalMachine,
            UNINSTALL_KEY,
            r"C:\Git\",
        );

        assert_not_found(
            find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\"),
            Hive::CurrentUser,
        );
        assert_eq!(host.opened(), 0);
    }

    #[test]
    fn missing_value_releases_key() {
        let host = MockHost::new().with_key(Hive::CurrentUser, UNINSTALL_KEY);

        assert_not_found(
            find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\"),
            Hive::CurrentUser,
        );
        assert_eq!(host.opened(), 1);
        assert_eq!(host.open_handles(), 0);
    }

    #[test]
    fn non_string_value_is_not_found() {
        let host = MockHost::new().with_value(
            Hive::LocalMachine,
            UNINSTALL_KEY,
            ValueType::ExpandString,
            r"%ProgramFiles%\Git\",
        );

        assert_not_found(
            find_in_registry(&host, Hive::LocalMachine, UNINSTALL_KEY, r"etc\"),
            Hive::LocalMachine,
        );
        assert_eq!(host.open_handles(), 0);
    }

    #[test]
    fn value_must_leave_room_for_subdir() {
        let location = format!(r"C:\{}\", "x".repeat(MAX_PATH - 8));
        let host =
            MockHost::new().with_install_location(Hive::CurrentUser, UNINSTALL_KEY, &location);

        assert_not_found(
            find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\"),
            Hive::CurrentUser,
        );
        assert!(find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, "").is_ok());
        assert_eq!(host.open_handles(), 0);
    }

    #[test]
    fn repeated_lookups_do_not_leak_handles() {
        let host = MockHost::new()
            .with_install_location(Hive::CurrentUser, UNINSTALL_KEY, r"C:\Git\")
            .with_key(Hive::LocalMachine, UNINSTALL_KEY);

        for _ in 0..10 {
            let _ = find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\");
            let _ = find_in_registry(&host, Hive::LocalMachine, UNINSTALL_KEY, r"etc\");
        }

        assert_eq!(host.opened(), 20);
        assert_eq!(host.open_handles(), 0);
    }

    #[test]
    fn unusable_install_location_warns() {
        let host = MockHost::new()
            .with_value(
                Hive::CurrentUser,
                UNINSTALL_KEY,
                ValueType::ExpandString,
                r"%ProgramFiles%\Git\",
            )
            .with_install_location(
                Hive::LocalMachine,
                UNINSTALL_KEY,
                &format!(r"C:\{}\", "x".repeat(MAX_PATH)),
            );

        let (result, records) =
            logged(|| find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\"));
        assert!(result.is_err());
        assert!(records
            .iter()
            .any(|(level, message)| *level == Level::Warn && message.contains("not a plain string")));

        let (result, records) =
            logged(|| find_in_registry(&host, Hive::LocalMachine, UNINSTALL_KEY, r"etc\"));
        assert!(result.is_err());
        assert!(records
            .iter()
            .any(|(level, message)| *level == Level::Warn && message.contains("too long")));
    }

    #[test]
    fn missing_install_location_does_not_warn() {
        let host = MockHost::new().with_key(Hive::CurrentUser, UNINSTALL_KEY);

        let (result, records) =
            logged(|| find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\"));
        assert!(result.is_err());
        assert!(records.iter().all(|(level, _)| *level != Level::Warn));
    }

    #[test]
    fn invalid_unicode_install_location_is_an_error() {
        let mut location: Vec<u16> = r"C:\Git".encode_utf16().collect();
        location.push(0xD800);
        location.push(b'\\' as u16);
        let host = MockHost::new().with_wide_value(
            Hive::CurrentUser,
            UNINSTALL_KEY,
            ValueType::String,
            location,
        );

        let err = find_in_registry(&host, Hive::CurrentUser, UNINSTALL_KEY, r"etc\").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::PathConversion);
        assert_eq!(host.open_handles(), 0);
    }
}
