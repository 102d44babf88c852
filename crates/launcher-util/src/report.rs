//! Reporting errors to the user.
//!
//! Messages are written to stderr as `LAUNCHER ERROR: <message>` followed by a
//! newline. Use the [`print_error!`](crate::print_error) and
//! [`die!`](crate::die) macros rather than calling the functions directly.

use std::fmt;
use std::io::{self, Write};
use std::process;

/// Written before every message.
pub const ERROR_PREFIX: &str = "LAUNCHER ERROR: ";

/// Prints an error message to stderr and returns.
///
/// ```no_run
/// launcher_util::print_error!("cannot find {} in {}", "tool.exe", r"C:\bin");
/// ```
#[macro_export]
macro_rules! print_error {
	($($arg:tt)*) => {
		$crate::report::print_error(::core::format_args!($($arg)*))
	};
}

/// Prints an error message to stderr and exits the process with status 1.
#[macro_export]
macro_rules! die {
	($($arg:tt)*) => {
		$crate::report::die(::core::format_args!($($arg)*))
	};
}

/// Writes a single error message, with prefix and trailing newline, to `out`.
pub fn write_error<W: Write + ?Sized>(out: &mut W, message: fmt::Arguments<'_>) -> io::Result<()> {
	out.write_all(ERROR_PREFIX.as_bytes())?;
	out.write_fmt(message)?;
	out.write_all(b"\n")?;
	out.flush()
}

/// Prints an error message to stderr.
pub fn print_error(message: fmt::Arguments<'_>) {
	let _mode = ConsoleModeGuard::utf8();
	let stderr = io::stderr();
	// Nowhere left to report a failure to write to stderr.
	let _ = write_error(&mut stderr.lock(), message);
}

/// Prints an error message to stderr and exits with status 1.
pub fn die(message: fmt::Arguments<'_>) -> ! {
	print_error(message);
	process::exit(1)
}

/// Switches the console to UTF-8 output for as long as it is alive.
///
/// Non-ASCII text in messages is then displayed correctly whatever code page
/// the console was using. The previous code page is restored on drop. On
/// platforms other than Windows this does nothing.
#[must_use = "the console mode is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ConsoleModeGuard {
	previous: Option<u32>,
}
impl ConsoleModeGuard {
	#[cfg(windows)]
	pub fn utf8() -> Self {
		use crate::windows::sys;

		let previous = sys::console_output_code_page()
			.filter(|&code_page| code_page != sys::CP_UTF8)
			.filter(|_| sys::set_console_output_code_page(sys::CP_UTF8).is_ok());
		Self { previous }
	}

	#[cfg(not(windows))]
	pub fn utf8() -> Self {
		Self { previous: None }
	}

	/// Whether the guard changed the console mode and will restore it.
	pub fn is_active(&self) -> bool {
		self.previous.is_some()
	}
}
impl Drop for ConsoleModeGuard {
	fn drop(&mut self) {
		#[cfg(windows)]
		if let Some(previous) = self.previous.take() {
			let _ = crate::windows::sys::set_console_output_code_page(previous);
		}
	}
}
