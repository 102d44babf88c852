//! String helpers for launcher paths.

use std::borrow::Cow;

use crate::error::NormalizeError;
use crate::windows::WindowsPath;

/// The extension of Windows executables.
pub const EXE_EXTENSION: &str = ".exe";

/// Normalizes a path so it can be compared with [`relative_to`](crate::relative::relative_to).
///
/// * MSYS style drive paths (`/c/foo`) become drive paths (`c:\foo`).
/// * `/` separators become `\`.
/// * The path is cleaned lexically (see [`WindowsPath`]), which also removes
///   any trailing separator that is not part of the root.
/// * ASCII letters are folded to lowercase.
///
/// This does not make the path absolute. Use [`sys_absolute`](crate::sys_absolute)
/// first if that is required.
///
/// # Example
///
/// ```
/// use launcher_util::path::normalize_path;
///
/// assert_eq!(normalize_path(r"C:/Foo\.\Bar\").unwrap(), r"c:\foo\bar");
/// assert_eq!(normalize_path("/d/Work/../src").unwrap(), r"d:\src");
/// ```
pub fn normalize_path(path: &str) -> Result<String, NormalizeError> {
	if path.contains('\0') {
		return Err(NormalizeError::ContainsNul { path: path.into() });
	}
	let path = msys_to_windows(path);
	let mut normalized = String::from(WindowsPath::parse(&path));
	normalized.make_ascii_lowercase();
	Ok(normalized)
}

/// Rewrites `/x` and `/x/rest` to `x:\` and `x:\rest`.
fn msys_to_windows(path: &str) -> Cow<'_, str> {
	match path.as_bytes() {
		[b'/', drive, rest @ ..]
			if drive.is_ascii_alphabetic() && matches!(rest, [] | [b'/', ..]) =>
		{
			let mut windows = String::with_capacity(path.len() + 1);
			windows.push(char::from(*drive));
			windows.push_str(":\\");
			windows.push_str(path[2..].trim_start_matches('/'));
			Cow::Owned(windows)
		}
		_ => Cow::Borrowed(path),
	}
}

/// Strips a trailing `.exe` from a binary path.
///
/// ```
/// use launcher_util::path::binary_path_without_extension;
///
/// assert_eq!(binary_path_without_extension(r"bin\tool.exe"), r"bin\tool");
/// assert_eq!(binary_path_without_extension(r"bin\tool"), r"bin\tool");
/// ```
pub fn binary_path_without_extension(binary: &str) -> &str {
	binary.strip_suffix(EXE_EXTENSION).unwrap_or(binary)
}

/// Makes sure a binary path ends with exactly one `.exe`.
pub fn binary_path_with_extension(binary: &str) -> String {
	let stem = binary_path_without_extension(binary);
	let mut binary = String::with_capacity(stem.len() + EXE_EXTENSION.len());
	binary.push_str(stem);
	binary.push_str(EXE_EXTENSION);
	binary
}

/// The part of the path after the last `\` or `/`.
///
/// If there is no separator the whole path is returned.
pub fn base_name(path: &str) -> &str {
	match path.rfind(['\\', '/']) {
		Some(pos) => &path[pos + 1..],
		None => path,
	}
}

/// The part of the path before the last `\` or `/`.
///
/// If there is no separator the whole path is returned.
pub fn parent_dir(path: &str) -> &str {
	match path.rfind(['\\', '/']) {
		Some(pos) => &path[..pos],
		None => path,
	}
}
