//! Process environment access.
//!
//! Windows limits environment variable values to 32,767 UTF-16 code units.
//! The same limit is applied on every platform so a launcher behaves the same
//! everywhere, and exceeding it is an error rather than a truncation.

use std::env;

use log::debug;

use crate::error::EnvError;

/// The maximum length of an environment variable value in UTF-16 code units.
pub const MAX_ENV_VALUE_LEN: usize = 32767;

fn utf16_len(value: &str) -> usize {
	value.chars().map(char::len_utf16).sum()
}

fn check_name(name: &str) -> Result<(), EnvError> {
	if name.is_empty() || name.contains(['=', '\0']) {
		Err(EnvError::InvalidName { name: name.into() })
	} else {
		Ok(())
	}
}

fn check_len(name: &str, value: &str) -> Result<(), EnvError> {
	let len = utf16_len(value);
	if len > MAX_ENV_VALUE_LEN {
		debug!("environment variable {name} has {len} UTF-16 units");
		Err(EnvError::ValueTooLong { name: name.into(), len })
	} else {
		Ok(())
	}
}

/// Gets the value of an environment variable.
///
/// Returns `Ok(None)` if the variable is not set.
///
/// ```
/// use launcher_util::env::{get_env, set_env};
///
/// set_env("LAUNCHER_UTIL_DOC_GET", "value").unwrap();
/// assert_eq!(get_env("LAUNCHER_UTIL_DOC_GET").unwrap().as_deref(), Some("value"));
/// ```
pub fn get_env(name: &str) -> Result<Option<String>, EnvError> {
	check_name(name)?;
	let value = match env::var_os(name) {
		Some(value) => value,
		None => return Ok(None),
	};
	let value =
		value.into_string().map_err(|_| EnvError::NotUnicode { name: name.into() })?;
	check_len(name, &value)?;
	Ok(Some(value))
}

/// Sets an environment variable for the current process and its children.
pub fn set_env(name: &str, value: &str) -> Result<(), EnvError> {
	check_name(name)?;
	if value.contains('\0') {
		return Err(EnvError::InvalidValue { name: name.into() });
	}
	check_len(name, value)?;
	env::set_var(name, value);
	Ok(())
}
