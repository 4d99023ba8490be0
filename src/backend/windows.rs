//! Windows backend
//!
//! Follows file-attribute semantics: anything that exists and is not a
//! directory counts as a file. Absolute resolution follows
//! `GetFullPathName`, which works lexically against the current directory
//! and does not require the target to exist.

use super::{current_dir, current_exe, metadata, read_dir_entries, remove, truncate, Backend};
use crate::error::{PathError, Result};
use crate::parse::parse;
use crate::path::PortablePath;
use crate::syntax::Syntax;
use std::fs;

/// Backend speaking Windows path syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsBackend;

impl Backend for WindowsBackend {
    fn syntax(&self) -> Syntax {
        Syntax::Windows
    }

    fn query_size(&self, path: &str) -> Option<u64> {
        log::trace!("windows query_size {path:?}");
        metadata(path).filter(|m| !m.is_dir()).map(|m| m.len())
    }

    fn query_is_directory(&self, path: &str) -> bool {
        log::trace!("windows query_is_directory {path:?}");
        metadata(path).is_some_and(|m| m.is_dir())
    }

    fn query_is_file(&self, path: &str) -> bool {
        log::trace!("windows query_is_file {path:?}");
        metadata(path).is_some_and(|m| !m.is_dir())
    }

    fn query_exists(&self, path: &str) -> bool {
        log::trace!("windows query_exists {path:?}");
        metadata(path).is_some()
    }

    fn resolve_absolute(&self, path: &str) -> Result<PortablePath> {
        log::trace!("windows resolve_absolute {path:?}");
        let resolved = std::path::absolute(path).map_err(|e| {
            log::debug!("full path lookup failed for {path:?}: {e}");
            PathError::resolution(path, &e)
        })?;
        Ok(parse(&resolved.to_string_lossy(), Syntax::Windows))
    }

    fn list_directory(&self, path: &str) -> Vec<PortablePath> {
        log::trace!("windows list_directory {path:?}");
        read_dir_entries(path, Syntax::Windows)
    }

    fn remove_file(&self, path: &str) -> bool {
        log::trace!("windows remove_file {path:?}");
        remove(path)
    }

    fn truncate_file(&self, path: &str, len: u64) -> bool {
        log::trace!("windows truncate_file {path:?} to {len}");
        truncate(path, len)
    }

    fn create_directory(&self, path: &str) -> bool {
        log::trace!("windows create_directory {path:?}");
        match fs::create_dir(path) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("CreateDirectory failed for {path:?}: {err}");
                false
            }
        }
    }

    fn current_working_directory(&self) -> Result<PortablePath> {
        current_dir(Syntax::Windows)
    }

    fn executable_image_path(&self) -> Result<PortablePath> {
        current_exe(Syntax::Windows)
    }
}
