//! # portable-path
//!
//! A filesystem path value that is independent of the syntax of the
//! platform it runs on, with POSIX and Windows filesystem backends.
//!
//! A path string is parsed in a given [`Syntax`] into a [`PortablePath`]:
//! a syntax tag, an absolute flag and a list of non-empty segments. Paths
//! compose by appending relative paths, and render back to a string in
//! either syntax.
//!
//! ## Features
//!
//! - **Parsing**: POSIX (`/`) and Windows (`\` or `/`, `C:\` drive roots)
//! - **Composition**: append relative paths, rejecting absolute addends and
//!   mixed syntaxes
//! - **Serialization**: render in either syntax, as UTF-8 or UTF-16
//! - **Backends**: existence, type and size queries, listing, truncation,
//!   removal, directory creation and absolute resolution
//!
//! ## Examples
//!
//! ### Parsing and rendering
//!
//! ```rust
//! use portable_path::{parse, Syntax};
//!
//! let path = parse("C:/Users\\me//docs", Syntax::Windows);
//! assert!(path.is_absolute());
//! assert_eq!(path.segments(), ["C:", "Users", "me", "docs"]);
//! assert_eq!(path.to_string_as(Syntax::Windows), "C:\\Users\\me\\docs");
//! ```
//!
//! ### Composition
//!
//! ```rust
//! use portable_path::{parse, PathError, Syntax};
//!
//! let base = parse("/srv", Syntax::Posix);
//! let site = base.join(&parse("www/index.html", Syntax::Posix)).unwrap();
//! assert_eq!(site.to_string_as(Syntax::Posix), "/srv/www/index.html");
//! assert_eq!(site.filename(), "index.html");
//!
//! // Absolute right-hand sides are refused rather than replacing the base
//! assert!(matches!(
//!     base.join(&parse("/etc", Syntax::Posix)),
//!     Err(PathError::AbsoluteAddend { .. })
//! ));
//! ```
//!
//! ### Filesystem queries
//!
//! ```rust
//! use portable_path::PortablePath;
//!
//! let missing = PortablePath::new("surely/this/does/not/exist");
//! assert!(!missing.exists());
//! assert_eq!(missing.file_size(), None);
//! ```

pub mod backend;
pub mod config;
mod error;
mod parse;
mod path;
mod serialize;
mod split;
mod syntax;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use backend::{Backend, NativeBackend, PosixBackend, WindowsBackend};
pub use error::{PathError, Result};
pub use parse::parse;
pub use path::{compose, PortablePath};
pub use serialize::serialize;
pub use split::split;
pub use syntax::Syntax;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
