use std::fmt;

use super::ExitCode;
use crate::host::Hive;

const REPORT_BUG_CTA: &str =
    "Please rerun the command that triggered this error with the environment
variable `FINDGIT_LOGLEVEL` set to `debug` and open an issue with the details!";

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ErrorKind {
    /// Thrown when no directory on the search path contains the requested executable
    ExecutableNotFound {
        name: String,
    },

    /// Thrown when the registry has no usable install location for Git
    InstallLocationNotFound {
        hive: Hive,
        key: String,
    },

    /// Thrown when a required argument is empty, e.g. a zero-capacity buffer
    InvalidArgument {
        name: &'static str,
    },

    /// Thrown when allocating space for the discovered directories fails
    OutOfMemory,

    /// Thrown when a wide-character path could not be converted to UTF-8
    PathConversion,

    /// Thrown when the `PATH` environment variable is not set
    PathVariableUnset,

    /// Thrown when discovery is requested on a host without Windows conventions
    UnsupportedPlatform,
}

impl ErrorKind {
    /// Whether this error only means that a single source had nothing to contribute
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorKind::ExecutableNotFound { .. }
                | ErrorKind::InstallLocationNotFound { .. }
                | ErrorKind::PathVariableUnset
        )
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            ErrorKind::ExecutableNotFound { .. } => ExitCode::FileSystemError,
            ErrorKind::InstallLocationNotFound { .. } => ExitCode::FileSystemError,
            ErrorKind::InvalidArgument { .. } => ExitCode::InvalidArguments,
            ErrorKind::OutOfMemory => ExitCode::UnknownError,
            ErrorKind::PathConversion => ExitCode::EnvironmentError,
            ErrorKind::PathVariableUnset => ExitCode::EnvironmentError,
            ErrorKind::UnsupportedPlatform => ExitCode::UnsupportedPlatform,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::ExecutableNotFound { name } => {
                write!(f, "Could not find `{}` on the search path.", name)
            }
            ErrorKind::InstallLocationNotFound { hive, key } => write!(
                f,
                "Could not read the Git install location from {}\\{}",
                hive, key
            ),
            ErrorKind::InvalidArgument { name } => write!(
                f,
                "Invalid argument `{}` passed to the search path walker.

{}",
                name, REPORT_BUG_CTA
            ),
            ErrorKind::OutOfMemory => write!(
                f,
                "Could not allocate memory for the discovered directories."
            ),
            ErrorKind::PathConversion => write!(
                f,
                "Could not convert a path to UTF-8.

Please ensure your environment variables and install locations contain valid text."
            ),
            ErrorKind::PathVariableUnset => write!(
                f,
                "Could not read the PATH environment variable.

Please ensure PATH is set in your environment."
            ),
            ErrorKind::UnsupportedPlatform => write!(
                f,
                "Git directory discovery is only supported on Windows."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds_are_recoverable() {
        assert!(ErrorKind::PathVariableUnset.is_not_found());
        assert!(ErrorKind::ExecutableNotFound {
            name: "git.exe".into()
        }
        .is_not_found());
        assert!(!ErrorKind::OutOfMemory.is_not_found());
        assert!(!ErrorKind::PathConversion.is_not_found());
    }

    #[test]
    fn install_location_message_names_key() {
        let kind = ErrorKind::InstallLocationNotFound {
            hive: Hive::LocalMachine,
            key: r"SOFTWARE\Git".into(),
        };

        assert_eq!(
            kind.to_string(),
            r"Could not read the Git install location from HKEY_LOCAL_MACHINE\SOFTWARE\Git"
        );
    }
}
