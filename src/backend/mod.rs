//! Filesystem backends
//!
//! A backend receives serialized path strings and answers queries about the
//! filesystem. Queries that cannot complete return `false` or `None`: a
//! missing file is an ordinary outcome, not an error. Lookups that callers
//! rely on as preconditions (absolute resolution, current directory,
//! executable path) return a [`Result`].
//!
//! Nothing is cached and nothing is locked. Listing a directory and then
//! querying its entries observes whatever the filesystem looks like at each
//! call.

mod posix;
mod windows;

pub use posix::PosixBackend;
pub use windows::WindowsBackend;

use crate::error::{PathError, Result};
use crate::parse::parse;
use crate::path::PortablePath;
use crate::syntax::Syntax;
use std::fs;
use std::io;

/// Backend for the platform this crate was built for
#[cfg(windows)]
pub type NativeBackend = WindowsBackend;
/// Backend for the platform this crate was built for
#[cfg(not(windows))]
pub type NativeBackend = PosixBackend;

/// Filesystem operations over serialized paths
pub trait Backend {
    /// Syntax paths are serialized in before being handed to this backend,
    /// and in which returned paths are parsed
    fn syntax(&self) -> Syntax;

    /// Size in bytes of a regular file, `None` for anything else
    fn query_size(&self, path: &str) -> Option<u64>;

    /// `true` if `path` exists and is a directory
    fn query_is_directory(&self, path: &str) -> bool;

    /// `true` if `path` exists and is a file
    fn query_is_file(&self, path: &str) -> bool;

    /// `true` if anything exists at `path`
    fn query_exists(&self, path: &str) -> bool;

    /// Resolve `path` to an absolute path
    fn resolve_absolute(&self, path: &str) -> Result<PortablePath>;

    /// Children of the directory at `path`, `.` and `..` included
    ///
    /// Empty if `path` is not a readable directory.
    fn list_directory(&self, path: &str) -> Vec<PortablePath>;

    /// Delete the entry at `path`
    ///
    /// POSIX follows `remove(3)` and also deletes an empty directory;
    /// Windows follows `DeleteFile` and only deletes files.
    fn remove_file(&self, path: &str) -> bool;

    /// Truncate or extend the file at `path` to `len` bytes
    fn truncate_file(&self, path: &str, len: u64) -> bool;

    /// Create a single directory; parents must already exist
    fn create_directory(&self, path: &str) -> bool;

    /// Absolute path of the current working directory
    fn current_working_directory(&self) -> Result<PortablePath>;

    /// Absolute path of the running executable
    fn executable_image_path(&self) -> Result<PortablePath>;
}

/// Log and drop a failed query, keeping the sentinel
fn sentinel<T>(operation: &str, path: &str, result: io::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{operation} failed for {path:?}: {err}");
            None
        }
    }
}

fn metadata(path: &str) -> Option<fs::Metadata> {
    sentinel("stat", path, fs::metadata(path))
}

/// Entries of `dir`, prefixed with `.` and `..`
fn read_dir_entries(path: &str, syntax: Syntax) -> Vec<PortablePath> {
    if !metadata(path).is_some_and(|m| m.is_dir()) {
        return Vec::new();
    }
    let Some(entries) = sentinel("read_dir", path, fs::read_dir(path)) else {
        return Vec::new();
    };

    let base = parse(path, syntax);
    let mut children = Vec::new();
    let names = [String::from("."), String::from("..")].into_iter().chain(entries.filter_map(|entry| {
        match entry {
            Ok(entry) => Some(entry.file_name().to_string_lossy().into_owned()),
            Err(err) => {
                log::debug!("skipping unreadable entry in {path:?}: {err}");
                None
            }
        }
    }));
    for name in names {
        // Re-parse so a name holding a separator of `syntax` splits into segments
        match base.join(&parse(&name, syntax)) {
            Ok(child) => children.push(child),
            Err(err) => log::debug!("skipping entry {name:?} in {path:?}: {err}"),
        }
    }
    children
}

fn remove(path: &str) -> bool {
    sentinel("remove", path, fs::remove_file(path)).is_some()
}

fn remove_empty_dir(path: &str) -> bool {
    sentinel("rmdir", path, fs::remove_dir(path)).is_some()
}

fn truncate(path: &str, len: u64) -> bool {
    let result = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .and_then(|file| file.set_len(len));
    sentinel("truncate", path, result).is_some()
}

fn current_dir(syntax: Syntax) -> Result<PortablePath> {
    let dir = std::env::current_dir().map_err(|e| {
        log::debug!("current_dir failed: {e}");
        PathError::io("current_working_directory", &e)
    })?;
    Ok(parse(&dir.to_string_lossy(), syntax))
}

fn current_exe(syntax: Syntax) -> Result<PortablePath> {
    let exe = std::env::current_exe().map_err(|e| {
        log::debug!("current_exe failed: {e}");
        PathError::io("executable_image_path", &e)
    })?;
    Ok(parse(&exe.to_string_lossy(), syntax))
}
