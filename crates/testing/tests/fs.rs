use std::fs;

use launcher_util::fs::{delete_directory, delete_file, directory_exists, file_exists};
use launcher_util::sys_absolute;

#[test]
fn file_and_directory_exist() {
	let dir = tempfile::tempdir().unwrap();
	let file = dir.path().join("tool.exe");
	fs::write(&file, b"binary").unwrap();

	assert!(file_exists(&file));
	assert!(!directory_exists(&file));
	assert!(directory_exists(dir.path()));
	assert!(!file_exists(dir.path()));

	let missing = dir.path().join("missing");
	assert!(!file_exists(&missing));
	assert!(!directory_exists(&missing));
}

#[test]
fn delete_file_and_directory() {
	let dir = tempfile::tempdir().unwrap();
	let sub = dir.path().join("sub");
	let file = sub.join("file.txt");
	fs::create_dir(&sub).unwrap();
	fs::write(&file, "content").unwrap();

	// Only empty directories are deleted.
	assert!(delete_directory(&sub).is_err());
	assert!(directory_exists(&sub));

	delete_file(&file).unwrap();
	assert!(!file_exists(&file));
	assert!(delete_file(&file).is_err());

	delete_directory(&sub).unwrap();
	assert!(!directory_exists(&sub));
	assert!(delete_directory(&sub).is_err());
}

#[test]
fn delete_file_does_not_delete_directories() {
	let dir = tempfile::tempdir().unwrap();
	assert!(delete_file(dir.path()).is_err());
	assert!(directory_exists(dir.path()));
}

#[test]
fn sys_absolute_keeps_absolute_paths() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("a").join("b");
	assert_eq!(sys_absolute(&path).unwrap(), path);
	assert!(sys_absolute("relative".as_ref()).unwrap().is_absolute());
}
