//! Path syntaxes
//!
//! A syntax is the separator and absolute-prefix convention a path string is
//! written in. It is independent of the platform the code runs on.

use crate::error::{PathError, Result};
use std::fmt;
use std::str::FromStr;

/// Separator and absolute-prefix convention of a path string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// `/`-separated, absolute when the string starts with `/`
    Posix,
    /// `\` or `/`-separated, absolute when it starts with a drive designator
    /// followed by a separator (`C:\`)
    Windows,
}

impl Syntax {
    /// Syntax of the platform this crate was built for
    #[cfg(windows)]
    pub const NATIVE: Syntax = Syntax::Windows;
    /// Syntax of the platform this crate was built for
    #[cfg(not(windows))]
    pub const NATIVE: Syntax = Syntax::Posix;

    /// Separator emitted when serializing
    pub const fn separator(self) -> char {
        match self {
            Syntax::Posix => '/',
            Syntax::Windows => '\\',
        }
    }

    /// Every character accepted as a separator when parsing
    pub const fn separators(self) -> &'static [char] {
        match self {
            Syntax::Posix => &['/'],
            Syntax::Windows => &['/', '\\'],
        }
    }

    /// Whether `c` separates segments in this syntax
    pub fn is_separator(self, c: char) -> bool {
        self.separators().contains(&c)
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Posix => write!(f, "posix"),
            Syntax::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Syntax {
    type Err = PathError;

    /// Parses `posix`/`unix` or `windows`/`win`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" => Ok(Syntax::Posix),
            "windows" | "win" => Ok(Syntax::Windows),
            _ => Err(PathError::UnknownSyntax {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(Syntax::Posix.separator(), '/');
        assert_eq!(Syntax::Windows.separator(), '\\');
        assert!(Syntax::Windows.is_separator('/'));
        assert!(Syntax::Windows.is_separator('\\'));
        assert!(!Syntax::Posix.is_separator('\\'));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("posix".parse::<Syntax>().unwrap(), Syntax::Posix);
        assert_eq!("UNIX".parse::<Syntax>().unwrap(), Syntax::Posix);
        assert_eq!(" Windows ".parse::<Syntax>().unwrap(), Syntax::Windows);
        assert_eq!("win".parse::<Syntax>().unwrap(), Syntax::Windows);
        assert!(matches!(
            "dos".parse::<Syntax>(),
            Err(PathError::UnknownSyntax { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for syntax in [Syntax::Posix, Syntax::Windows] {
            assert_eq!(syntax.to_string().parse::<Syntax>().unwrap(), syntax);
        }
    }

    #[test]
    #[cfg(not(windows))]
    fn test_native_is_posix() {
        assert_eq!(Syntax::NATIVE, Syntax::Posix);
    }
}
