//! Parsing path strings into segments
//!
//! POSIX strings are absolute when they start with `/`. Windows strings are
//! absolute only when they start with a drive designator immediately
//! followed by a separator (`C:\` or `C:/`); anything else, including a bare
//! `C:`, is relative.

use crate::path::PortablePath;
use crate::split::split;
use crate::syntax::Syntax;

/// Parse `raw` as a path written in `syntax`
///
/// Parsing never fails and never touches the filesystem.
///
/// # Examples
/// ```
/// use portable_path::{parse, Syntax};
///
/// let path = parse("C:\\Users/x", Syntax::Windows);
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), ["C:", "Users", "x"]);
///
/// let path = parse("C:", Syntax::Windows);
/// assert!(!path.is_absolute());
/// ```
pub fn parse(raw: &str, syntax: Syntax) -> PortablePath {
    match syntax {
        Syntax::Posix => parse_posix(raw),
        Syntax::Windows => parse_windows(raw),
    }
}

fn parse_posix(raw: &str) -> PortablePath {
    let segments = split(raw, Syntax::Posix.separators())
        .map(str::to_string)
        .collect();
    PortablePath::from_parts(Syntax::Posix, raw.starts_with('/'), segments)
}

fn parse_windows(raw: &str) -> PortablePath {
    let separators = Syntax::Windows.separators();

    if has_drive_root(raw) {
        // The first three bytes are ASCII, so both slices fall on char boundaries
        let mut segments = vec![raw[..2].to_string()];
        segments.extend(split(&raw[3..], separators).map(str::to_string));
        return PortablePath::from_parts(Syntax::Windows, true, segments);
    }

    let segments = split(raw, separators).map(str::to_string).collect();
    PortablePath::from_parts(Syntax::Windows, false, segments)
}

/// `X:\` or `X:/` at the start of `raw`
fn has_drive_root(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    // An ASCII separator at index 2 makes index 2 a char boundary
    bytes.len() >= 3 && matches!(bytes[2], b'\\' | b'/') && is_drive_designator(&raw[..2])
}

/// One ASCII letter followed by `:`
pub(crate) fn is_drive_designator(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
