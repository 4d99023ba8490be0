//! The path value type
//!
//! A [`PortablePath`] is a syntax tag, an absolute flag and an ordered list
//! of non-empty segments. For an absolute Windows path the first segment is
//! the drive designator (`C:`). Values are plain data: composing two paths
//! builds a new value and nothing is shared between them.

use crate::backend::{Backend, NativeBackend};
use crate::config::default_syntax;
use crate::error::{PathError, Result};
use crate::parse::{is_drive_designator, parse};
use crate::serialize::serialize;
use crate::syntax::Syntax;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A filesystem path decoupled from the native path syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortablePath {
    syntax: Syntax,
    absolute: bool,
    segments: Vec<String>,
}

/// Append the relative path `addend` to `base`
///
/// No `.` or `..` resolution takes place.
///
/// # Errors
/// - [`PathError::AbsoluteAddend`] if `addend` is absolute
/// - [`PathError::SyntaxMismatch`] if the two paths use different syntaxes
///
/// # Examples
/// ```
/// use portable_path::{compose, parse, Syntax};
///
/// let joined = compose(&parse("a/b", Syntax::Posix), &parse("c", Syntax::Posix)).unwrap();
/// assert_eq!(joined.segments(), ["a", "b", "c"]);
///
/// assert!(compose(&parse("/usr", Syntax::Posix), &parse("/bin", Syntax::Posix)).is_err());
/// ```
pub fn compose(base: &PortablePath, addend: &PortablePath) -> Result<PortablePath> {
    if addend.absolute {
        return Err(PathError::AbsoluteAddend {
            path: addend.to_string_as(addend.syntax),
        });
    }
    if base.syntax != addend.syntax {
        return Err(PathError::SyntaxMismatch {
            base: base.syntax,
            addend: addend.syntax,
        });
    }

    let mut segments = Vec::with_capacity(base.segments.len() + addend.segments.len());
    segments.extend(base.segments.iter().cloned());
    segments.extend(addend.segments.iter().cloned());
    Ok(PortablePath::from_parts(base.syntax, base.absolute, segments))
}

impl PortablePath {
    pub(crate) fn from_parts(syntax: Syntax, absolute: bool, segments: Vec<String>) -> Self {
        debug_assert!(segments
            .iter()
            .all(|s| !s.is_empty() && !s.contains(syntax.separators())));
        debug_assert!(
            !(absolute && syntax == Syntax::Windows)
                || segments.first().is_some_and(|s| is_drive_designator(s))
        );
        PortablePath {
            syntax,
            absolute,
            segments,
        }
    }

    /// Parse `raw` in the process-wide default syntax
    ///
    /// See [`crate::config::default_syntax`].
    pub fn new(raw: &str) -> Self {
        parse(raw, default_syntax())
    }

    /// Parse `raw` in an explicit syntax
    pub fn with_syntax(raw: &str, syntax: Syntax) -> Self {
        parse(raw, syntax)
    }

    /// Decode UTF-16 (invalid units are replaced) and parse the result
    ///
    /// # Examples
    /// ```
    /// use portable_path::{PortablePath, Syntax};
    ///
    /// let wide: Vec<u16> = "C:\\temp".encode_utf16().collect();
    /// let path = PortablePath::from_wide(&wide, Syntax::Windows);
    /// assert_eq!(path.segments(), ["C:", "temp"]);
    /// ```
    pub fn from_wide(wide: &[u16], syntax: Syntax) -> Self {
        parse(&String::from_utf16_lossy(wide), syntax)
    }

    /// Path with no segments
    pub fn empty(syntax: Syntax) -> Self {
        PortablePath::from_parts(syntax, false, Vec::new())
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// `true` when there are no segments, whether absolute or not
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append `addend`; see [`compose`]
    pub fn join(&self, addend: &PortablePath) -> Result<PortablePath> {
        compose(self, addend)
    }

    /// Render using the separator conventions of `target`
    pub fn to_string_as(&self, target: Syntax) -> String {
        serialize(self, target)
    }

    /// Render as UTF-16 using the separator conventions of `target`
    pub fn to_wide(&self, target: Syntax) -> Vec<u16> {
        self.to_string_as(target).encode_utf16().collect()
    }

    /// Last segment, or `""` for an empty path
    pub fn filename(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Parent of this path, resolved through the native backend if absolute
    pub fn parent_path(&self) -> Result<PortablePath> {
        self.parent_path_with(&NativeBackend::default())
    }

    /// Parent of this path
    ///
    /// The last segment is dropped, except when it is `.` or `..` (or there
    /// is none): then a `..` segment is appended instead. An absolute result
    /// is passed through [`Backend::resolve_absolute`].
    pub fn parent_path_with<B: Backend>(&self, backend: &B) -> Result<PortablePath> {
        let mut parent = self.clone();
        match self.segments.last().map(String::as_str) {
            Some(last) if last != "." && last != ".." => {
                parent.segments.pop();
            }
            _ => parent.segments.push("..".to_string()),
        }

        if self.absolute {
            return backend.resolve_absolute(&parent.to_string_as(backend.syntax()));
        }
        Ok(parent)
    }

    /// Extension of the filename, via the native backend
    pub fn extension(&self) -> &str {
        self.extension_with(&NativeBackend::default())
    }

    /// Text after the last `.` of the filename
    ///
    /// Only reported while the path names an existing directory; for anything
    /// else, regular files included, this is `""`.
    pub fn extension_with<B: Backend>(&self, backend: &B) -> &str {
        if !backend.query_is_directory(&self.to_string_as(backend.syntax())) {
            return "";
        }
        self.filename()
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    fn native(&self) -> (NativeBackend, String) {
        let backend = NativeBackend::default();
        let rendered = self.to_string_as(backend.syntax());
        (backend, rendered)
    }

    pub fn exists(&self) -> bool {
        let (backend, path) = self.native();
        backend.query_exists(&path)
    }

    pub fn is_file(&self) -> bool {
        let (backend, path) = self.native();
        backend.query_is_file(&path)
    }

    pub fn is_directory(&self) -> bool {
        let (backend, path) = self.native();
        backend.query_is_directory(&path)
    }

    /// Size in bytes, `None` unless this is a regular file
    pub fn file_size(&self) -> Option<u64> {
        let (backend, path) = self.native();
        backend.query_size(&path)
    }

    pub fn remove_file(&self) -> bool {
        let (backend, path) = self.native();
        backend.remove_file(&path)
    }

    /// Truncate or extend the file to `len` bytes
    pub fn resize_file(&self, len: u64) -> bool {
        let (backend, path) = self.native();
        backend.truncate_file(&path, len)
    }

    /// Resolve to an absolute path
    ///
    /// # Errors
    /// [`PathError::Resolution`] with the OS error code attached.
    pub fn make_absolute(&self) -> Result<PortablePath> {
        let (backend, path) = self.native();
        backend.resolve_absolute(&path)
    }

    /// Entries of the directory at `path`, including `.` and `..`
    pub fn read_dir(path: &PortablePath) -> Vec<PortablePath> {
        let (backend, rendered) = path.native();
        backend.list_directory(&rendered)
    }

    /// Create the directory at `path`; its parent must exist
    pub fn create_directory(path: &PortablePath) -> bool {
        let (backend, rendered) = path.native();
        backend.create_directory(&rendered)
    }

    /// Current working directory
    pub fn current_path() -> Result<PortablePath> {
        NativeBackend::default().current_working_directory()
    }

    /// Absolute path of the running executable
    pub fn application_path() -> Result<PortablePath> {
        NativeBackend::default().executable_image_path()
    }
}

impl Default for PortablePath {
    fn default() -> Self {
        PortablePath::empty(default_syntax())
    }
}

impl fmt::Display for PortablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_as(default_syntax()))
    }
}

impl From<&str> for PortablePath {
    fn from(raw: &str) -> Self {
        PortablePath::new(raw)
    }
}

impl From<String> for PortablePath {
    fn from(raw: String) -> Self {
        PortablePath::new(&raw)
    }
}

impl FromStr for PortablePath {
    type Err = Infallible;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PortablePath::new(raw))
    }
}
