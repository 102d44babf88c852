//! Existence checks and deletion of filesystem entries.
//!
//! Every path is made absolute with [`sys_absolute`] before it is used, so
//! relative paths are resolved against the current directory at the time of
//! the call.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::sys_absolute;

fn absolute(path: &Path) -> io::Result<PathBuf> {
	let absolute = sys_absolute(path)?;
	debug!("resolved {} to {}", path.display(), absolute.display());
	Ok(absolute)
}

fn metadata(path: &Path) -> Option<fs::Metadata> {
	let path = match absolute(path) {
		Ok(path) => path,
		Err(e) => {
			debug!("cannot make {} absolute: {e}", path.display());
			return None;
		}
	};
	fs::metadata(path).ok()
}

/// Returns true if `path` exists and is not a directory.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
	metadata(path.as_ref()).is_some_and(|m| !m.is_dir())
}

/// Returns true if `path` exists and is a directory.
pub fn directory_exists(path: impl AsRef<Path>) -> bool {
	metadata(path.as_ref()).is_some_and(|m| m.is_dir())
}

/// Deletes a file.
pub fn delete_file(path: impl AsRef<Path>) -> io::Result<()> {
	let path = absolute(path.as_ref())?;
	fs::remove_file(&path)?;
	debug!("deleted file {}", path.display());
	Ok(())
}

/// Deletes an empty directory.
pub fn delete_directory(path: impl AsRef<Path>) -> io::Result<()> {
	let path = absolute(path.as_ref())?;
	fs::remove_dir(&path)?;
	debug!("deleted directory {}", path.display());
	Ok(())
}
