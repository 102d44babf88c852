//! Quoting of process arguments.
//!
//! There are two escaping policies here and they are not interchangeable.
//! Which one to use depends on the program that will split the resulting
//! command line:
//!
//! * [`quote_arg`] produces arguments for programs that split their command
//!   line with the Microsoft C runtime rules (`CreateProcessW` callers,
//!   `CommandLineToArgvW`). It only escapes backslashes where they precede a
//!   quote.
//! * [`bash_escape_arg`] produces arguments for a POSIX shell which treats
//!   every backslash as an escape character.
//!
//! [`split_command_line`] is the decoder matching [`quote_arg`].

use std::borrow::Cow;

const QUOTED_EMPTY: &str = "\"\"";

/// Quotes an argument so that the Microsoft C runtime splits it back into
/// exactly `arg`.
///
/// Arguments without spaces or quotes are returned unchanged.
///
/// # Example
///
/// ```
/// use launcher_util::quote::quote_arg;
///
/// assert_eq!(quote_arg("plain"), "plain");
/// assert_eq!(quote_arg(""), r#""""#);
/// assert_eq!(quote_arg(r"C:\Program Files\"), r#""C:\Program Files\\""#);
/// assert_eq!(quote_arg(r#"say "hi""#), r#""say \"hi\"""#);
/// ```
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
	if arg.is_empty() {
		return Cow::Borrowed(QUOTED_EMPTY);
	}
	if !arg.contains([' ', '"']) {
		return Cow::Borrowed(arg);
	}

	let bytes = arg.as_bytes();
	let mut quoted = String::with_capacity(arg.len() + 2);
	quoted.push('"');

	// Start of the run of ordinary characters not yet copied to `quoted`.
	// Quotes and backslashes are ASCII so slicing at them is always valid.
	let mut plain: Option<usize> = None;
	let mut i = 0;
	while i < bytes.len() {
		match bytes[i] {
			b'"' => {
				flush(&mut quoted, arg, &mut plain, i);
				quoted.push_str("\\\"");
				i += 1;
			}
			b'\\' => {
				flush(&mut quoted, arg, &mut plain, i);
				let run = bytes[i..].iter().take_while(|&&b| b == b'\\').count();
				let end = i + run;
				match bytes.get(end) {
					// The closing quote would otherwise be escaped by the run.
					None => push_backslashes(&mut quoted, run * 2),
					Some(b'"') => {
						push_backslashes(&mut quoted, run * 2);
						quoted.push_str("\\\"");
						i = end + 1;
						continue;
					}
					// Backslashes only have a special meaning in front of a quote.
					Some(_) => push_backslashes(&mut quoted, run),
				}
				i = end;
			}
			_ => {
				plain.get_or_insert(i);
				i += 1;
			}
		}
	}
	flush(&mut quoted, arg, &mut plain, bytes.len());
	quoted.push('"');
	Cow::Owned(quoted)
}

fn flush(quoted: &mut String, arg: &str, plain: &mut Option<usize>, end: usize) {
	if let Some(start) = plain.take() {
		quoted.push_str(&arg[start..end]);
	}
}

fn push_backslashes(quoted: &mut String, count: usize) {
	quoted.extend(core::iter::repeat('\\').take(count));
}

/// Escapes an argument for a shell that treats `\` as an escape everywhere.
///
/// Every `"` becomes `\"` and every `\` becomes `\\`. The result is wrapped in
/// quotes only if the argument contains a space.
///
/// # Example
///
/// ```
/// use launcher_util::quote::bash_escape_arg;
///
/// assert_eq!(bash_escape_arg(r"C:\tmp"), r"C:\\tmp");
/// assert_eq!(bash_escape_arg(r#"a "b""#), r#""a \"b\"""#);
/// ```
pub fn bash_escape_arg(arg: &str) -> String {
	if arg.is_empty() {
		return QUOTED_EMPTY.into();
	}
	let has_space = arg.contains(' ');

	let mut escaped = String::with_capacity(arg.len() + 2);
	if has_space {
		escaped.push('"');
	}
	for c in arg.chars() {
		match c {
			'"' => escaped.push_str("\\\""),
			'\\' => escaped.push_str("\\\\"),
			c => escaped.push(c),
		}
	}
	if has_space {
		escaped.push('"');
	}
	escaped
}

/// Splits a command line into arguments using the Microsoft C runtime rules.
///
/// * Spaces and tabs separate arguments unless they are quoted.
/// * `2n` backslashes followed by `"` produce `n` backslashes and the quote
///   starts or ends a quoted section.
/// * `2n + 1` backslashes followed by `"` produce `n` backslashes and a
///   literal `"`.
/// * Backslashes not followed by a quote are literal.
/// * Inside a quoted section `""` produces a literal `"`.
///
/// Unlike `CommandLineToArgvW` the first argument gets no special treatment.
///
/// # Example
///
/// ```
/// use launcher_util::quote::split_command_line;
///
/// assert_eq!(
///     split_command_line(r#"a "b c" "" d\"e"#),
///     ["a", "b c", "", r#"d"e"#]
/// );
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
	let mut args = Vec::new();
	let mut current = String::new();
	// An argument exists as soon as any character (including a quote) is seen.
	let mut in_arg = false;
	let mut in_quotes = false;
	let mut backslashes = 0usize;

	let mut chars = line.chars().peekable();
	while let Some(c) = chars.next() {
		match c {
			'\\' => {
				in_arg = true;
				backslashes += 1;
			}
			'"' => {
				in_arg = true;
				current.extend(core::iter::repeat('\\').take(backslashes / 2));
				if backslashes % 2 == 1 {
					current.push('"');
				} else if in_quotes && chars.peek() == Some(&'"') {
					chars.next();
					current.push('"');
				} else {
					in_quotes = !in_quotes;
				}
				backslashes = 0;
			}
			' ' | '\t' if !in_quotes => {
				current.extend(core::iter::repeat('\\').take(backslashes));
				backslashes = 0;
				if in_arg {
					args.push(core::mem::take(&mut current));
					in_arg = false;
				}
			}
			c => {
				in_arg = true;
				current.extend(core::iter::repeat('\\').take(backslashes));
				backslashes = 0;
				current.push(c);
			}
		}
	}
	current.extend(core::iter::repeat('\\').take(backslashes));
	if in_arg {
		args.push(current);
	}
	args
}
