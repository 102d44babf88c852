//! Prints each argument quoted for `CreateProcessW` and for bash.
use launcher_util::quote::{bash_escape_arg, quote_arg, split_command_line};

fn main() {
	for arg in std::env::args().skip(1) {
		let quoted = quote_arg(&arg);
		println!("{arg:?}");
		println!("  windows: {quoted}");
		println!("  bash:    {}", bash_escape_arg(&arg));
		if split_command_line(&quoted) != [arg.as_str()] {
			launcher_util::print_error!("{arg:?} does not round trip");
		}
	}
}
