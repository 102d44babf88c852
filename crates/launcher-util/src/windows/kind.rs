use crate::util;

/// Windows path type.
///
/// This does not do any validation so parsing the kind will never fail,
/// even for broken or invalid paths. Both `\` and `/` are accepted as
/// separators, except in the verbatim prefix `\\?\` which must be exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinPathKind {
    /// A traditional drive path such as `C:\`, `R:\`, etc.
    Drive(char),
    /// A path to a network directory such as `\\server\share\`.
    Unc,
    /// A device path such as `\\.\COM1`.
    Device,
    /// A path that is passed to the NT kernel without parsing, except to change
    /// the prefix. These start with `\\?\`.
    Verbatim,
    /// A path that's relative to the current directory.
    CurrentDirectoryRelative,
    /// A DOS drive relative path (e.g. `C:file`).
    DriveRelative(char),
    /// A DOS root relative path (e.g. `\file`).
    RootRelative,
}

impl WinPathKind {
    /// Examine the path prefix to find the type of the path given.
    ///
    /// ```
    /// use launcher_util::windows::WinPathKind;
    ///
    /// assert_eq!(WinPathKind::from_str(r"C:\foo"), WinPathKind::Drive('C'));
    /// assert_eq!(WinPathKind::from_str(r"\\server\share"), WinPathKind::Unc);
    /// assert_eq!(WinPathKind::from_str(r"foo\bar"), WinPathKind::CurrentDirectoryRelative);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(path: &str) -> Self {
        Self::split_str(path).0
    }

    /// Split the path into `WinPathKind` and the rest of the path.
    ///
    /// Only the smallest part needed to identify the path type is split off.
    /// E.g. `\\server\share\file.txt` is split as
    /// `(WinPathKind::Unc, r"server\share\file.txt")`.
    pub fn split_str(path: &str) -> (Self, &str) {
        let (kind, len) = Self::from_str_with_len(path);
        (kind, &path[len..])
    }

    fn from_str_with_len(path: &str) -> (Self, usize) {
        let bytes = path.as_bytes();
        // Exact match only. `//?/` is a device path.
        if let [b'\\', b'\\', b'?', b'\\', ..] = bytes {
            return (Self::Verbatim, 4);
        }
        // The order of these matches is important.
        match_pattern! {
            bytes;
            // `\\.\` | `//?/`
            [/, /, '.', /, ..] => (Self::Device, 4),
            // `\\`
            [/, /, ..] => (Self::Unc, 2),
            // `\`
            [/, ..] => (Self::RootRelative, 1),
            _ => Self::from_drive_str(path)
        }
    }

    // The drive letter may be any character representable as a single UTF-16
    // code unit, so it is parsed as a `char` rather than a byte.
    fn from_drive_str(path: &str) -> (Self, usize) {
        let mut chars = path.chars();
        let drive = match chars.next() {
            Some(drive) if (drive as u32) <= 0xFFFF => drive,
            _ => return (Self::CurrentDirectoryRelative, 0),
        };
        let len = drive.len_utf8();
        match_pattern! {
            chars.as_str().as_bytes();
            [':', /, ..] => (Self::Drive(drive), len + 2),
            [':', ..] => (Self::DriveRelative(drive), len + 1),
            _ => (Self::CurrentDirectoryRelative, 0)
        }
    }

    /// Is the path absolute. Being absolute means it doesn't need to be joined
    /// to a base path (e.g. the current directory, or a drive current directory)
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Drive(_) | Self::Unc | Self::Device | Self::Verbatim)
    }

    /// Is the path one of the weird ones from DOS.
    pub const fn is_legacy_relative(self) -> bool {
        matches!(self, Self::DriveRelative(_) | Self::RootRelative)
    }
}

/// Returns the root designator of a path.
///
/// Two absolute paths can only be related to each other if their roots are
/// equal. The root is:
///
/// * `C:` for drive paths (and drive relative paths),
/// * `\\server\share` for UNC paths,
/// * the prefix plus the first component for device and verbatim paths
///   (e.g. `\\.\pipe` or `\\?\C:`),
/// * `\` for root relative paths and the empty string otherwise.
///
/// ```
/// use launcher_util::windows::root;
///
/// assert_eq!(root(r"c:\foo\bar"), "c:");
/// assert_eq!(root(r"\\server\share\foo"), r"\\server\share");
/// assert_eq!(root(r"\\?\C:\foo"), r"\\?\C:");
/// assert_eq!(root(r"foo\bar"), "");
/// ```
pub fn root(path: &str) -> &str {
    let (kind, len) = WinPathKind::from_str_with_len(path);
    let end = match kind {
        WinPathKind::Drive(_) => len - 1,
        WinPathKind::Unc => len + util::components_end(&path[len..], 2),
        WinPathKind::Device | WinPathKind::Verbatim => len + util::components_end(&path[len..], 1),
        WinPathKind::DriveRelative(_)
        | WinPathKind::RootRelative
        | WinPathKind::CurrentDirectoryRelative => len,
    };
    &path[..end]
}
