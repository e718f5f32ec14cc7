//! Listing of the local filesystem.

use std::fs::{self, ReadDir};

use super::{DirectoryLister, ListerError, RawEntry};
use crate::entry::EntryType;

/// [`DirectoryLister`] over `std::fs`.
///
/// Entry types are taken without following symlinks, so a symlink is
/// reported as [`EntryType::Other`] and skipped by walks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLister;

impl DirectoryLister for LocalLister {
    type Handle = ReadDir;

    fn open_directory(&mut self, path: &str) -> Result<ReadDir, ListerError> {
        fs::read_dir(path).map_err(|e| ListerError::new(e.to_string()))
    }

    fn read_next_entry(
        &mut self,
        handle: &mut ReadDir,
    ) -> Result<Option<RawEntry>, ListerError> {
        let Some(next) = handle.next() else {
            return Ok(None);
        };
        let entry = next.map_err(|e| ListerError::new(e.to_string()))?;
        let entry_type = match entry.file_type() {
            Ok(kind) if kind.is_file() => EntryType::RegularFile,
            Ok(kind) if kind.is_dir() => EntryType::Directory,
            _ => EntryType::Other,
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        Ok(Some(RawEntry { name, entry_type }))
    }

    fn close_directory(&mut self, handle: ReadDir) -> Result<(), ListerError> {
        drop(handle);
        Ok(())
    }
}
