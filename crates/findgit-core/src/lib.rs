//! Locates the installation and configuration directories of Git for Windows.
//!
//! Directories are discovered from the executables on `PATH`, the install
//! location the Git installer records in the registry, and well-known
//! environment-variable based locations. Every operation returns a
//! [`PathList`](list::PathList) of UTF-8 paths with forward slashes, joined
//! by `;` in priority order.

pub mod buffer;
pub mod convert;
pub mod env;
pub mod error;
pub mod find;
pub mod host;
pub mod list;
pub mod log;
pub mod style;
pub mod walk;

pub use find::{
    find_global_dirs, find_programdata_dirs, find_sysdir, find_system_dirs, find_xdg_dirs, Finder,
    SysDir,
};
pub use list::PathList;
