//! Property test generators for portable paths
//!
//! Strategies for raw path strings in both syntaxes, including redundant and
//! mixed separators, drive roots and dot segments.

use crate::syntax::Syntax;
use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Valid segment text (no separators of either syntax, no colons)
    pub fn segment() -> impl Strategy<Value = String> {
        prop_oneof![
            8 => "[a-zA-Z0-9_][a-zA-Z0-9_. -]{0,12}",
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
        ]
    }

    /// Segment lists, possibly empty
    pub fn segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(Self::segment(), 0..=6)
    }

    /// A run of one to three separators drawn from `syntax`
    pub fn separator_run(syntax: Syntax) -> impl Strategy<Value = String> {
        let choices: Vec<char> = syntax.separators().to_vec();
        prop::collection::vec(prop::sample::select(choices), 1..=3)
            .prop_map(|run| run.into_iter().collect())
    }

    /// Join `segments` using arbitrary separator runs of `syntax`
    fn joined(syntax: Syntax) -> impl Strategy<Value = String> {
        Self::segments().prop_flat_map(move |segments| {
            let n = segments.len();
            (
                Just(segments),
                prop::collection::vec(Self::separator_run(syntax), n + 1),
                any::<bool>(),
            )
                .prop_map(|(segments, runs, trailing)| {
                    let mut out = String::new();
                    for (i, segment) in segments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(&runs[i]);
                        }
                        out.push_str(segment);
                    }
                    if trailing && !segments.is_empty() {
                        out.push_str(&runs[segments.len()]);
                    }
                    out
                })
        })
    }

    /// Relative or absolute POSIX strings with redundant separators
    pub fn posix_path() -> impl Strategy<Value = String> {
        (
            prop::option::of(Self::separator_run(Syntax::Posix)),
            Self::joined(Syntax::Posix),
        )
            .prop_map(|(root, rest)| format!("{}{}", root.unwrap_or_default(), rest))
    }

    /// Drive designators `A:` through `z:`
    pub fn drive() -> impl Strategy<Value = String> {
        "[a-zA-Z]".prop_map(|letter| format!("{letter}:"))
    }

    /// Relative or drive-rooted Windows strings with mixed separators
    pub fn windows_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Self::joined(Syntax::Windows),
            (
                Self::drive(),
                Self::separator_run(Syntax::Windows),
                Self::joined(Syntax::Windows)
            )
                .prop_map(|(drive, run, rest)| format!("{drive}{run}{rest}")),
        ]
    }

    /// Any path string paired with the syntax it is written in
    pub fn any_path() -> impl Strategy<Value = (String, Syntax)> {
        prop_oneof![
            Self::posix_path().prop_map(|p| (p, Syntax::Posix)),
            Self::windows_path().prop_map(|p| (p, Syntax::Windows)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segments_never_contain_separators(segment in PathGenerators::segment()) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
            prop_assert!(!segment.contains('\\'));
            prop_assert!(!segment.contains(':'));
        }

        #[test]
        fn drive_paths_start_with_root(path in PathGenerators::windows_path()) {
            let bytes = path.as_bytes();
            if bytes.len() >= 2 && bytes[1] == b':' {
                prop_assert!(bytes.len() >= 3 && matches!(bytes[2], b'/' | b'\\'));
            }
        }

        #[test]
        fn generators_dont_panic(_path in PathGenerators::any_path()) {
            // Only checks the strategies themselves
        }
    }
}
