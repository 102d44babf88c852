// Pattern shorthand for matching path prefixes byte by byte.
// `/` matches either separator and `'.'` matches the `.` or `?` of a device
// prefix. Anything else is passed through as a normal pattern.
macro_rules! pattern {
    () => {};
    (!!**!! /) => { b'\\' | b'/' };
    (!!**!! '.') => { b'.' | b'?' };
    (!!**!! ':') => { b':' };

    (!!**!! $pat:pat) => { $pat };
    ([$($tt:tt$(@$pat:pat)?),+]) => {
        [$(pattern!(!!**!! $tt$(@$pat)?)),+]
    };
    ($($tt:tt)|+) => {
        $(pattern!($tt))|+
    };
}

macro_rules! match_pattern {
    ($match:expr; $([$($tt:tt)+]$(|[$($tt2:tt)*])* => $expr:expr),+, _ => $final:expr) => {
        match $match {
            $(
                pattern!([$($tt)+]$(|[$($tt2)*])*) => $expr
            ),+,
            _ => $final,
        }
    };
}

/// Byte offset of the separator that ends the first `count` components of
/// `path`, or the length of `path` if it has fewer components.
pub fn components_end(path: &str, count: usize) -> usize {
    let mut end = 0;
    for n in 0..count {
        let start = if n == 0 { 0 } else { end + 1 };
        match path[start..].find(['\\', '/']) {
            Some(pos) => end = start + pos,
            None => return path.len(),
        }
    }
    end
}
