//! Prints the path of the first argument relative to the second.
//!
//! `cargo run --example relative -- C:\foo\bar C:\foo\baz`
use launcher_util::path::normalize_path;
use launcher_util::relative::relative_to;
use launcher_util::{die, sys_absolute};

fn normalize(path: &str) -> String {
	let absolute = match sys_absolute(path.as_ref()) {
		Ok(absolute) => absolute,
		Err(e) => die!("couldn't convert {path} to an absolute path: {e}"),
	};
	match normalize_path(&absolute.to_string_lossy()) {
		Ok(normalized) => normalized,
		Err(e) => die!("{e}"),
	}
}

fn main() {
	let mut args = std::env::args().skip(1);
	let (Some(path), Some(base)) = (args.next(), args.next()) else {
		die!("usage: relative <path> <base>");
	};
	match relative_to(&normalize(&path), &normalize(&base)) {
		Ok(relative) => println!("{relative}"),
		Err(e) => die!("{e}"),
	}
}
