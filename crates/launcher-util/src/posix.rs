#![cfg(unix)]
use std::env;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// [Unix only] Make a POSIX path absolute without changing its semantics.
///
/// The path does not need to exist. Symlinks and `..` components are not
/// resolved, but `.` components and repeated separators are removed.
///
/// # Example
///
/// ```
/// #[cfg(unix)]
/// {
///     use launcher_util::posix::posix_absolute;
///     use std::path::Path;
///     use std::env::current_dir;
///
///     let path = Path::new("path/to/..//./file");
///     assert_eq!(
///         posix_absolute(path).unwrap(),
///         current_dir().unwrap().join("path/to/../file")
///     )
/// }
/// ```
pub fn posix_absolute(path: &Path) -> io::Result<PathBuf> {
	let path_os = path.as_os_str().as_bytes();
	// Skip the redundant leading "." component if it exists.
	let mut components = path.strip_prefix(".").unwrap_or(path).components();

	let mut absolute = if path.is_absolute() {
		// Exactly two leading slashes are implementation defined and kept.
		if path_os.starts_with(b"//") && !path_os.starts_with(b"///") {
			components.next();
			PathBuf::from("//")
		} else {
			PathBuf::new()
		}
	} else {
		env::current_dir()?
	};
	absolute.extend(components);

	// A trailing slash requires the path to be a directory.
	if path_os.ends_with(b"/") {
		absolute.push("");
	}
	Ok(absolute)
}
