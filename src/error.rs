//! Error types for path operations

use crate::syntax::Syntax;
use thiserror::Error;

/// The error type for path operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Composition with an absolute right-hand operand
    #[error("Cannot compose absolute path {path} onto another path")]
    AbsoluteAddend { path: String },

    /// Composition across different path syntaxes
    #[error("Cannot compose a {addend} path onto a {base} path")]
    SyntaxMismatch { base: Syntax, addend: Syntax },

    /// Absolute-path resolution failure
    #[error("Cannot resolve {path} to an absolute path: {message}")]
    Resolution {
        path: String,
        code: Option<i32>,
        message: String,
    },

    /// The process-wide default syntax was already configured
    #[error("Default path syntax is already set to {current}")]
    DefaultSyntaxAlreadySet { current: Syntax },

    /// Unrecognized syntax name
    #[error("Unknown path syntax: {name}")]
    UnknownSyntax { name: String },

    /// I/O error during a filesystem lookup
    #[error("I/O error in {operation}: {message}")]
    Io {
        operation: String,
        code: Option<i32>,
        message: String,
    },
}

impl PathError {
    pub(crate) fn resolution(path: &str, err: &std::io::Error) -> Self {
        PathError::Resolution {
            path: path.to_string(),
            code: err.raw_os_error(),
            message: err.to_string(),
        }
    }

    pub(crate) fn io(operation: &str, err: &std::io::Error) -> Self {
        PathError::Io {
            operation: operation.to_string(),
            code: err.raw_os_error(),
            message: err.to_string(),
        }
    }

    /// Raw OS error code attached to the failure, if any
    pub fn os_code(&self) -> Option<i32> {
        match self {
            PathError::Resolution { code, .. } | PathError::Io { code, .. } => *code,
            _ => None,
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::io("filesystem operation", &err)
    }
}

/// Result type for path operations
pub type Result<T> = std::result::Result<T, PathError>;
