//! POSIX backend
//!
//! Follows `stat(2)` semantics: symlinks are followed, and only regular files
//! count as files. Absolute resolution follows `realpath(3)` and therefore
//! requires the target to exist.

use super::{
    current_dir, current_exe, metadata, read_dir_entries, remove, remove_empty_dir, truncate,
    Backend,
};
use crate::error::{PathError, Result};
use crate::parse::parse;
use crate::path::PortablePath;
use crate::syntax::Syntax;
use std::fs;

/// Backend speaking POSIX path syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosixBackend;

impl Backend for PosixBackend {
    fn syntax(&self) -> Syntax {
        Syntax::Posix
    }

    fn query_size(&self, path: &str) -> Option<u64> {
        log::trace!("posix query_size {path:?}");
        metadata(path).filter(|m| m.is_file()).map(|m| m.len())
    }

    fn query_is_directory(&self, path: &str) -> bool {
        log::trace!("posix query_is_directory {path:?}");
        metadata(path).is_some_and(|m| m.is_dir())
    }

    fn query_is_file(&self, path: &str) -> bool {
        log::trace!("posix query_is_file {path:?}");
        metadata(path).is_some_and(|m| m.is_file())
    }

    fn query_exists(&self, path: &str) -> bool {
        log::trace!("posix query_exists {path:?}");
        metadata(path).is_some()
    }

    fn resolve_absolute(&self, path: &str) -> Result<PortablePath> {
        log::trace!("posix resolve_absolute {path:?}");
        let resolved = fs::canonicalize(path).map_err(|e| {
            log::debug!("realpath failed for {path:?}: {e}");
            PathError::resolution(path, &e)
        })?;
        Ok(parse(&resolved.to_string_lossy(), Syntax::Posix))
    }

    fn list_directory(&self, path: &str) -> Vec<PortablePath> {
        log::trace!("posix list_directory {path:?}");
        read_dir_entries(path, Syntax::Posix)
    }

    fn remove_file(&self, path: &str) -> bool {
        log::trace!("posix remove_file {path:?}");
        if metadata(path).is_some_and(|m| m.is_dir()) {
            return remove_empty_dir(path);
        }
        remove(path)
    }

    fn truncate_file(&self, path: &str, len: u64) -> bool {
        log::trace!("posix truncate_file {path:?} to {len}");
        truncate(path, len)
    }

    fn create_directory(&self, path: &str) -> bool {
        log::trace!("posix create_directory {path:?}");
        // Owner-only, like mkdir(path, S_IRWXU)
        #[cfg(unix)]
        let builder = {
            use std::os::unix::fs::DirBuilderExt;
            let mut builder = fs::DirBuilder::new();
            builder.mode(0o700);
            builder
        };
        #[cfg(not(unix))]
        let builder = fs::DirBuilder::new();
        match builder.create(path) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("mkdir failed for {path:?}: {err}");
                false
            }
        }
    }

    fn current_working_directory(&self) -> Result<PortablePath> {
        current_dir(Syntax::Posix)
    }

    fn executable_image_path(&self) -> Result<PortablePath> {
        current_exe(Syntax::Posix)
    }
}
