//! Path and argument utilities for a native process launcher.
//!
//! # Quoting arguments
//!
//! [`quote_arg`](quote::quote_arg) quotes a single argument so that a program
//! splitting its command line with the Microsoft C runtime rules receives it
//! unchanged. [`bash_escape_arg`](quote::bash_escape_arg) is the equivalent for
//! a POSIX shell.
//!
//! ```
//! use launcher_util::quote::{quote_arg, split_command_line};
//!
//! let arg = r#"C:\Program Files\tool "v2"\"#;
//! let quoted = quote_arg(arg);
//! assert_eq!(quoted, r#""C:\Program Files\tool \"v2\"\\""#);
//! assert_eq!(split_command_line(&quoted), [arg]);
//! ```
//!
//! # Relative paths
//!
//! [`relative_to`](relative::relative_to) computes the relative path between
//! two normalized Windows paths.
//!
//! ```
//! use launcher_util::path::normalize_path;
//! use launcher_util::relative::relative_to;
//!
//! let path = normalize_path(r"C:\Users\Me\Project\bin\tool.exe").unwrap();
//! let base = normalize_path(r"C:/Users/me/project/out").unwrap();
//! assert_eq!(relative_to(&path, &base).unwrap(), r"..\bin\tool.exe");
//! ```
//!
//! # Platform helpers
//!
//! [`fs`], [`env`], [`random`] and [`report`] wrap the platform facilities a
//! launcher needs. Failures are returned as typed errors from [`error`];
//! diagnostics are emitted through the [`log`] facade.
#![allow(clippy::single_char_pattern)]

// Utility functions and macros.
#[macro_use]
mod util;

pub mod env;
pub mod error;
pub mod fs;
pub mod path;
pub mod posix;
pub mod quote;
pub mod random;
pub mod relative;
pub mod report;
pub mod windows;

pub use error::{Error, Result};

/// Converts a path to absolute according to the rules of the current platform.
///
/// Unlike [`std::fs::canonicalize`] this does not resolve symlinks and the
/// path does not need to exist. On Windows this uses `GetFullPathNameW`.
///
/// # Example
///
/// ```
/// use launcher_util::sys_absolute;
/// use std::path::Path;
/// use std::env::current_dir;
///
/// let path = Path::new(r"path/to/.//file");
/// assert_eq!(
///     sys_absolute(path).unwrap(),
///     // WARNING: This may not always be equal depending on the current
///     // directory and OS.
///     current_dir().unwrap().join("path/to/file")
/// );
/// ```
pub fn sys_absolute(path: &std::path::Path) -> std::io::Result<std::path::PathBuf> {
	#[cfg(unix)]
	return posix::posix_absolute(path);
	#[cfg(windows)]
	return windows::win_absolute(path);
}
