use launcher_util::error::RelativePathError;
use launcher_util::path::normalize_path;
use launcher_util::relative::relative_to;

fn relative(path: &str, base: &str) -> String {
	relative_to(path, base).unwrap()
}

/// Applies a relative path to `base` one component at a time.
fn resolve(base: &str, relative: &str) -> String {
	let mut components: Vec<&str> = base.split('\\').filter(|c| !c.is_empty()).collect();
	for component in relative.split('\\') {
		match component {
			"" => {}
			".." => {
				components.pop();
			}
			name => components.push(name),
		}
	}
	let resolved = components.join("\\");
	// Popping everything after a drive leaves `c:` rather than `c:\`.
	if resolved.ends_with(':') {
		resolved + "\\"
	} else {
		resolved
	}
}

#[test]
fn relative_to_manual() {
	assert_eq!(relative(r"c:\foo\bar", r"c:\foo"), "bar");
	assert_eq!(relative(r"c:\foo", r"c:\foo\bar"), r"..\");
	assert_eq!(relative(r"c:\foo\bar1", r"c:\foo\bar2"), r"..\bar1");
	assert_eq!(relative(r"c:\foo\bar", r"c:\foo\baz\qux"), r"..\..\bar");
	assert_eq!(relative(r"c:\a\b\c", r"c:\a"), r"b\c");
	assert_eq!(relative(r"c:\a", r"c:\a\b\c"), r"..\..\");
	assert_eq!(relative(r"c:\x\y", r"c:\a\b"), r"..\..\x\y");
	// Root directories end with a separator.
	assert_eq!(relative(r"c:\foo", r"c:\"), "foo");
	assert_eq!(relative(r"c:\", r"c:\foo"), r"..\");
	// A shared name prefix is not a shared component.
	assert_eq!(relative(r"c:\foo\barbaz", r"c:\foo\bar"), r"..\barbaz");
	assert_eq!(relative(r"c:\foo\bar", r"c:\foo\barbaz"), r"..\bar");
	assert_eq!(relative(r"c:\foobar", r"c:\foo"), r"..\foobar");
}

#[test]
fn relative_to_same_path_is_empty() {
	for path in [r"c:\", r"c:\foo", r"c:\foo\bar", r"\\server\share\x", "", "foo", r"foo\bar"] {
		assert_eq!(relative(path, path), "", "{path}");
	}
}

#[test]
fn relative_to_relative_paths() {
	assert_eq!(relative(r"foo\bar", r"foo"), "bar");
	assert_eq!(relative(r"foo", r"foo\bar"), r"..\");
	assert_eq!(relative(r"foo\bar", r"foo\baz\qux"), r"..\..\bar");
	assert_eq!(relative(r"a\b", "c"), r"..\a\b");
	assert_eq!(relative("a", ""), "a");
	assert_eq!(relative("", "a"), r"..\");
}

#[test]
fn relative_to_unc_paths() {
	assert_eq!(relative(r"\\server\share\a\b", r"\\server\share\c"), r"..\a\b");
	assert_eq!(relative(r"\\server\share\a", r"\\server\share"), "a");
}

#[test]
fn relative_to_different_roots() {
	let err = relative_to(r"c:\x", r"d:\y").unwrap_err();
	assert_eq!(
		err,
		RelativePathError::DifferentRoots { path: r"c:\x".into(), base: r"d:\y".into() }
	);
	assert!(matches!(
		relative_to(r"\\server\one\a", r"\\server\two\a"),
		Err(RelativePathError::DifferentRoots { .. })
	));
	assert!(matches!(
		relative_to(r"\\server\share\a", r"c:\a"),
		Err(RelativePathError::DifferentRoots { .. })
	));
	// Roots are compared exactly, paths must be normalized first.
	assert!(matches!(
		relative_to(r"C:\x", r"c:\x"),
		Err(RelativePathError::DifferentRoots { .. })
	));
}

#[test]
fn relative_to_incomparable_paths() {
	let err = relative_to(r"c:\x", "y").unwrap_err();
	assert_eq!(
		err,
		RelativePathError::IncomparablePaths { path: r"c:\x".into(), base: "y".into() }
	);
	assert!(matches!(
		relative_to("y", r"c:\x"),
		Err(RelativePathError::IncomparablePaths { .. })
	));
	// Root relative and drive relative paths are not absolute.
	assert!(matches!(
		relative_to(r"\x", r"c:\x"),
		Err(RelativePathError::IncomparablePaths { .. })
	));
	assert!(matches!(
		relative_to(r"c:x", r"c:\x"),
		Err(RelativePathError::IncomparablePaths { .. })
	));
}

#[test]
fn relative_to_error_messages() {
	let err = relative_to(r"c:\x", "y").unwrap_err();
	let message = err.to_string();
	assert!(message.starts_with("cannot calculate relative path"), "{message}");
	assert!(message.contains(r"path = c:\x"), "{message}");
	assert!(message.contains("base = y"), "{message}");
}

#[test]
fn relative_to_resolves_back_to_path() {
	let paths = [
		r"c:\",
		r"c:\a",
		r"c:\a\b",
		r"c:\a\b\c",
		r"c:\a\bc",
		r"c:\ab\c",
		r"c:\x\y\z",
		r"c:\a\b\c\d\e",
	];
	for path in paths {
		for base in paths {
			let relative = relative(path, base);
			assert_eq!(resolve(base, &relative), path, "path = {path}, base = {base}");
		}
	}
}

#[test]
fn relative_to_normalized_input() {
	let path = normalize_path(r"C:/Work/Project/bazel-bin/tool.exe").unwrap();
	let base = normalize_path(r"c:\work\PROJECT\.\runfiles\").unwrap();
	assert_eq!(relative(&path, &base), r"..\bazel-bin\tool.exe");
}
