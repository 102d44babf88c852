//! Error values returned by the fallible operations of this crate.

use std::io;

use derive_more::{Display, Error, From};

/// Why a relative path could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RelativePathError {
	/// One path is absolute and the other is not.
	#[display(
		"cannot calculate relative path from an absolute and a non-absolute path\npath = {path}\nbase = {base}"
	)]
	IncomparablePaths { path: String, base: String },
	/// Both paths are absolute but live under different drives or shares.
	#[display(
		"cannot calculate relative path from absolute paths under different roots\npath = {path}\nbase = {base}"
	)]
	DifferentRoots { path: String, base: String },
}

/// A path could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NormalizeError {
	#[display("failed to normalize {path:?}: path contains a NUL character")]
	ContainsNul { path: String },
}

/// An environment variable could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EnvError {
	#[display("invalid environment variable name {name:?}")]
	InvalidName { name: String },
	#[display("value of environment variable {name} contains a NUL character")]
	InvalidValue { name: String },
	/// The value is longer than [`MAX_ENV_VALUE_LEN`](crate::env::MAX_ENV_VALUE_LEN).
	#[display("value of environment variable {name} is too long ({len} UTF-16 units)")]
	ValueTooLong { name: String, len: usize },
	#[display("value of environment variable {name} is not valid Unicode")]
	NotUnicode { name: String },
}

/// Any error produced by this crate.
#[derive(Debug, Display, Error, From)]
pub enum Error {
	RelativePath(RelativePathError),
	Normalize(NormalizeError),
	Env(EnvError),
	Io(io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
