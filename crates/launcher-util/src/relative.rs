//! Relative paths between two normalized Windows paths.

use crate::error::RelativePathError;
use crate::windows::{root, WinPathKind};

const SEPARATOR: u8 = b'\\';
const PARENT: &str = "..\\";

/// Computes the path of `path` relative to the directory `base`.
///
/// Both paths must already be normalized (see
/// [`normalize_path`](crate::path::normalize_path)): `\` separated, the same
/// case and without a trailing separator. The comparison is done byte by byte
/// and only ever splits the paths at a separator, so a shared prefix in the
/// middle of a file name (`bar1` and `bar2`) is not treated as common.
///
/// The result is empty if the paths are equal. A result ending in `\` means
/// `path` is an ancestor of `base`.
///
/// # Errors
///
/// Fails if only one of the paths is absolute, or if both are absolute but
/// have different roots (e.g. different drives).
///
/// # Example
///
/// ```
/// use launcher_util::relative::relative_to;
///
/// assert_eq!(relative_to(r"c:\foo\bar", r"c:\foo").unwrap(), "bar");
/// assert_eq!(relative_to(r"c:\foo", r"c:\foo\bar").unwrap(), r"..\");
/// assert_eq!(relative_to(r"c:\foo\bar1", r"c:\foo\bar2").unwrap(), r"..\bar1");
/// assert!(relative_to(r"c:\x", r"d:\y").is_err());
/// ```
pub fn relative_to(path: &str, base: &str) -> Result<String, RelativePathError> {
	let path_absolute = WinPathKind::from_str(path).is_absolute();
	if path_absolute != WinPathKind::from_str(base).is_absolute() {
		return Err(RelativePathError::IncomparablePaths { path: path.into(), base: base.into() });
	}
	if path_absolute && root(path) != root(base) {
		return Err(RelativePathError::DifferentRoots { path: path.into(), base: base.into() });
	}

	let path_bytes = path.as_bytes();
	let base_bytes = base.as_bytes();

	// Index of the last separator inside the common prefix.
	let mut last_sep: Option<usize> = None;
	let mut pos = 0;
	while let (Some(&p), Some(&b)) = (path_bytes.get(pos), base_bytes.get(pos)) {
		if p != b {
			break;
		}
		if p == SEPARATOR {
			last_sep = Some(pos);
		}
		pos += 1;
	}

	match (path_bytes.get(pos), base_bytes.get(pos)) {
		(None, None) => return Ok(String::new()),
		// One path is the parent of the other. The end of the shorter path
		// acts as the separator ending the common prefix.
		(None, Some(&SEPARATOR)) | (Some(&SEPARATOR), None) => last_sep = Some(pos),
		_ => {}
	}

	// Everything after the common prefix starts here, in both paths.
	let rest = last_sep.map_or(0, |sep| sep + 1);

	let mut relative = String::with_capacity(path.len().saturating_sub(rest) + PARENT.len());
	// One `..\` for the component that ends `base` and one for each
	// component before it that is not shared with `path`.
	if let Some(base_rest) = base_bytes.get(rest..).filter(|rest| !rest.is_empty()) {
		relative.push_str(PARENT);
		let parents = base_rest.iter().filter(|&&b| b == SEPARATOR).count();
		relative.extend(core::iter::repeat(PARENT).take(parents));
	}
	// Nothing is appended when `path` is an ancestor of `base`.
	if let Some(path_rest) = path.get(rest..) {
		relative.push_str(path_rest);
	}
	Ok(relative)
}
