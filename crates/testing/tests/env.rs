use launcher_util::env::{get_env, set_env, MAX_ENV_VALUE_LEN};
use launcher_util::error::EnvError;

// Each test uses its own variable names since tests run in parallel.

#[test]
fn set_and_get() {
	set_env("LAUNCHER_UTIL_TEST_SET", "some value").unwrap();
	assert_eq!(get_env("LAUNCHER_UTIL_TEST_SET").unwrap().as_deref(), Some("some value"));
	set_env("LAUNCHER_UTIL_TEST_SET", "ünïcödé").unwrap();
	assert_eq!(get_env("LAUNCHER_UTIL_TEST_SET").unwrap().as_deref(), Some("ünïcödé"));
	set_env("LAUNCHER_UTIL_TEST_SET", "").unwrap();
	assert_eq!(get_env("LAUNCHER_UTIL_TEST_SET").unwrap().as_deref(), Some(""));
}

#[test]
fn get_missing() {
	assert_eq!(get_env("LAUNCHER_UTIL_TEST_NEVER_SET_8f3a").unwrap(), None);
}

#[test]
fn invalid_names() {
	for name in ["", "A=B", "A\0B"] {
		assert_eq!(set_env(name, "x"), Err(EnvError::InvalidName { name: name.into() }));
		assert_eq!(get_env(name), Err(EnvError::InvalidName { name: name.into() }));
	}
}

#[test]
fn invalid_value() {
	assert_eq!(
		set_env("LAUNCHER_UTIL_TEST_NUL", "a\0b"),
		Err(EnvError::InvalidValue { name: "LAUNCHER_UTIL_TEST_NUL".into() })
	);
	assert_eq!(get_env("LAUNCHER_UTIL_TEST_NUL").unwrap(), None);
}

#[test]
fn value_length_limit() {
	let longest = "a".repeat(MAX_ENV_VALUE_LEN);
	set_env("LAUNCHER_UTIL_TEST_LONGEST", &longest).unwrap();
	assert_eq!(get_env("LAUNCHER_UTIL_TEST_LONGEST").unwrap(), Some(longest));

	let too_long = "a".repeat(MAX_ENV_VALUE_LEN + 1);
	assert_eq!(
		set_env("LAUNCHER_UTIL_TEST_TOO_LONG", &too_long),
		Err(EnvError::ValueTooLong {
			name: "LAUNCHER_UTIL_TEST_TOO_LONG".into(),
			len: MAX_ENV_VALUE_LEN + 1
		})
	);
	assert_eq!(get_env("LAUNCHER_UTIL_TEST_TOO_LONG").unwrap(), None);
}

#[test]
fn value_length_counts_utf16_units() {
	// Each emoji is two UTF-16 code units.
	let too_long = "😍".repeat(MAX_ENV_VALUE_LEN / 2 + 1);
	assert!(matches!(
		set_env("LAUNCHER_UTIL_TEST_UTF16", &too_long),
		Err(EnvError::ValueTooLong { .. })
	));
	let fits = "😍".repeat(MAX_ENV_VALUE_LEN / 2);
	set_env("LAUNCHER_UTIL_TEST_UTF16", &fits).unwrap();
}

#[test]
fn get_value_set_elsewhere_too_long() {
	std::env::set_var("LAUNCHER_UTIL_TEST_EXTERNAL", "a".repeat(MAX_ENV_VALUE_LEN + 10));
	assert_eq!(
		get_env("LAUNCHER_UTIL_TEST_EXTERNAL"),
		Err(EnvError::ValueTooLong {
			name: "LAUNCHER_UTIL_TEST_EXTERNAL".into(),
			len: MAX_ENV_VALUE_LEN + 10
		})
	);
}

#[test]
fn error_messages() {
	let err = EnvError::ValueTooLong { name: "PATH".into(), len: 40000 };
	assert_eq!(err.to_string(), "value of environment variable PATH is too long (40000 UTF-16 units)");
	let err = launcher_util::Error::from(err);
	assert!(matches!(err, launcher_util::Error::Env(_)));
}
