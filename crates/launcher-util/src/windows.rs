pub(crate) mod kind;
#[cfg(windows)]
pub(crate) mod sys;

use std::borrow::Cow;
use std::fmt::{self, Write};

pub use kind::{root, WinPathKind};
#[cfg(windows)]
pub use sys::win_absolute;

/// The separator used when a Windows path is written out.
pub const SEPARATOR: char = '\\';

/// A lexically cleaned Windows path.
///
/// Parsing mimics what the Win32 APIs do to a path before using it:
/// both separators are accepted, repeated separators and `.` components are
/// removed, `..` removes the previous component and trailing dots and spaces
/// are trimmed from file names. Verbatim (`\\?\`) paths are never cleaned.
///
/// # Example
///
/// ```
/// use launcher_util::windows::WindowsPath;
///
/// let path = WindowsPath::parse(r"C:/Program Files\..\.\tools\\bin.. ");
/// assert_eq!(path.to_string(), r"C:\tools\bin");
/// ```
#[derive(Debug, Clone)]
pub struct WindowsPath<'a> {
	kind: WinPathKind,
	prefix: Cow<'a, str>,
	components: Vec<&'a str>,
}
impl<'a> WindowsPath<'a> {
	/// Parse and clean a Windows path.
	pub fn parse(path: &'a str) -> Self {
		let (kind, rest) = WinPathKind::split_str(path);
		if kind == WinPathKind::Verbatim {
			return Self { kind, prefix: Cow::Borrowed(path), components: Vec::new() };
		}

		// UNC paths keep the server and share names in the prefix so `..`
		// can never remove them.
		let (prefix, rest) = match kind {
			WinPathKind::Unc => {
				let root = root(path);
				(root, path[root.len()..].trim_start_matches(['\\', '/']))
			}
			_ => (&path[..path.len() - rest.len()], rest),
		};
		let prefix = if prefix.contains('/') {
			Cow::Owned(prefix.replace('/', "\\"))
		} else {
			Cow::Borrowed(prefix)
		};

		let mut this = Self { kind, prefix, components: Vec::new() };
		let mut names = rest.split(['\\', '/']).peekable();
		while let Some(name) = names.next() {
			let name = if names.peek().is_some() {
				clean_dir_name(name)
			} else {
				clean_file_name(name)
			};
			this.push(name);
		}
		this
	}

	/// Appends a single component, interpreting `.` and `..`.
	///
	/// Empty components are ignored.
	pub fn push(&mut self, component: &'a str) {
		match component {
			"" | "." => {}
			".." => {
				if !self.pop() && self.keeps_parent_components() {
					self.components.push("..");
				}
			}
			name => self.components.push(name),
		}
	}

	/// Remove the last component. Returns false if there was nothing to remove.
	///
	/// Leading `..` components of a relative path are never removed.
	pub fn pop(&mut self) -> bool {
		match self.components.last() {
			Some(&"..") | None => false,
			Some(_) => {
				self.components.pop();
				true
			}
		}
	}

	/// A `..` at the start of an absolute or root relative path refers to the
	/// root itself so it's discarded.
	fn keeps_parent_components(&self) -> bool {
		matches!(
			self.kind,
			WinPathKind::CurrentDirectoryRelative | WinPathKind::DriveRelative(_)
		)
	}

	pub fn kind(&self) -> WinPathKind {
		self.kind
	}

	/// The path prefix with separators normalized to `\`.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn components(&self) -> impl Iterator<Item = &'a str> + '_ {
		self.components.iter().copied()
	}

	/// Whether the path is only a prefix (a root or the current directory).
	pub fn is_root(&self) -> bool {
		self.components.is_empty()
	}
}
impl fmt::Display for WindowsPath<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.prefix)?;
		let mut components = self.components();
		if let Some(first) = components.next() {
			// Only the UNC prefix is stored without its trailing separator.
			if self.kind == WinPathKind::Unc {
				f.write_char(SEPARATOR)?;
			}
			f.write_str(first)?;
		}
		for component in components {
			f.write_char(SEPARATOR)?;
			f.write_str(component)?;
		}
		Ok(())
	}
}
impl From<WindowsPath<'_>> for String {
	fn from(path: WindowsPath<'_>) -> Self {
		path.to_string()
	}
}

/// Strip a single trailing dot from a directory name, but not from `.` or `..`.
fn clean_dir_name(name: &str) -> &str {
	if name != "." && name.ends_with('.') && !name.ends_with("..") {
		&name[..name.len() - 1]
	} else {
		name
	}
}

/// Strip all trailing dots and spaces from a file name, but not from `.` or `..`.
fn clean_file_name(name: &str) -> &str {
	if name != "." && name != ".." {
		name.trim_end_matches([' ', '.'])
	} else {
		name
	}
}
