//! Process-wide configuration
//!
//! The default syntax is used by the convenience constructors
//! (`PortablePath::new`, `From<&str>`, ...). It can be set once, early in
//! `main`; until then it reads as [`Syntax::NATIVE`].

use crate::error::{PathError, Result};
use crate::syntax::Syntax;
use std::sync::OnceLock;

static DEFAULT_SYNTAX: OnceLock<Syntax> = OnceLock::new();

/// Set the syntax used by constructors that do not take one explicitly
///
/// Only the first call succeeds.
///
/// # Examples
/// ```
/// use portable_path::{config, Syntax};
///
/// config::set_default_syntax(Syntax::Windows).unwrap();
/// assert_eq!(config::default_syntax(), Syntax::Windows);
/// assert!(config::set_default_syntax(Syntax::Posix).is_err());
/// ```
pub fn set_default_syntax(syntax: Syntax) -> Result<()> {
    DEFAULT_SYNTAX
        .set(syntax)
        .map_err(|_| PathError::DefaultSyntaxAlreadySet {
            current: default_syntax(),
        })?;
    log::debug!("default path syntax set to {syntax}");
    Ok(())
}

/// The configured default syntax, or [`Syntax::NATIVE`] if none was set
pub fn default_syntax() -> Syntax {
    DEFAULT_SYNTAX.get().copied().unwrap_or(Syntax::NATIVE)
}
