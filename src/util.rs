//! Shared line-oriented parsing helpers for the `/etc/*` database files.
//! Synchronous: this crate has no I/O driver of its own to read files
//! asynchronously with.

use memchr::memchr;

pub(crate) fn remove_comment(line: &[u8]) -> &[u8] {
    match memchr(b'#', line) {
        Some(i) => &line[..i],
        None => line,
    }
}

pub(crate) fn is_whitespace(c: &u8) -> bool {
    matches!(c, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}
