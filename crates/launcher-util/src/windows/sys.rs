//! [Windows only] Use the Windows API to perform path and console operations.

use std::ffi::OsString;
use std::io;
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};
use std::ptr;

/// Makes the path absolute using `GetFullPathNameW`.
///
/// The path does not need to exist and symlinks are not resolved. Verbatim
/// paths are returned as-is.
pub fn win_absolute(path: &Path) -> io::Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Ok(PathBuf::new());
    }
    if let Some(std::path::Component::Prefix(prefix)) = path.components().next() {
        if prefix.kind().is_verbatim() {
            return Ok(path.into());
        }
    }
    let path = to_wide(path)?;
    full_path_name(&path).map(|wide| OsString::from_wide(&wide).into())
}

/// Calls `GetFullPathNameW`, growing the buffer until the result fits.
fn full_path_name(path: &[u16]) -> io::Result<Vec<u16>> {
    debug_assert_eq!(path.last(), Some(&0));
    // Enough for most paths. The API reports the size it needs otherwise.
    let mut buffer: Vec<u16> = vec![0; 260];
    loop {
        let capacity = u32::try_from(buffer.len()).unwrap_or(u32::MAX);
        // SAFETY: `path` is null terminated and `buffer` is valid for
        // `capacity` writes.
        let len = unsafe {
            c::GetFullPathNameW(path.as_ptr(), capacity, buffer.as_mut_ptr(), ptr::null_mut())
        } as usize;
        if len == 0 {
            return Err(io::Error::last_os_error());
        } else if len < buffer.len() {
            // Success. `len` does not include the terminating null.
            buffer.truncate(len);
            return Ok(buffer);
        }
        // Too small. `len` is the required size including the null.
        buffer.resize(len, 0);
    }
}

fn to_wide(path: &Path) -> io::Result<Vec<u16>> {
    let mut contains_null = false;
    let path: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .inspect(|&w| {
            if w == 0 {
                contains_null = true
            }
        })
        .chain([0])
        .collect();
    if !contains_null {
        Ok(path)
    } else {
        Err(io::Error::new(io::ErrorKind::InvalidInput, "paths must not contain nulls"))
    }
}

/// The UTF-8 code page identifier.
pub const CP_UTF8: u32 = 65001;

/// The current console output code page, or `None` if there is no console.
pub fn console_output_code_page() -> Option<u32> {
    // SAFETY: No arguments. Returns 0 on failure.
    match unsafe { c::GetConsoleOutputCP() } {
        0 => None,
        code_page => Some(code_page),
    }
}

pub fn set_console_output_code_page(code_page: u32) -> io::Result<()> {
    // SAFETY: No pointers are passed.
    if unsafe { c::SetConsoleOutputCP(code_page) } != 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[allow(nonstandard_style, clippy::style)]
mod c {
    type BOOL = i32;
    type DWORD = u32;
    type UINT = u32;
    type LPCWSTR = *const u16;
    type LPWSTR = *mut u16;
    #[link(name = "kernel32")]
    extern "system" {
        pub fn GetFullPathNameW(
            lpFileName: LPCWSTR,
            nBufferLength: DWORD,
            lpBuffer: LPWSTR,
            lpFilePart: *mut LPWSTR,
        ) -> DWORD;
        pub fn GetConsoleOutputCP() -> UINT;
        pub fn SetConsoleOutputCP(wCodePageID: UINT) -> BOOL;
    }
}
