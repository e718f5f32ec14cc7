//! Listing of a remote tree over SFTP.
//!
//! Session setup and authentication happen outside this crate; the lister
//! only needs an open `ssh2::Sftp` channel.

use std::path::Path;

use ssh2::{ErrorCode, File, FileType, Sftp};

use super::{DirectoryLister, ListerError, RawEntry};
use crate::entry::EntryType;

/// Session error code libssh2 uses for "no more entries" from `readdir`.
const LIBSSH2_ERROR_FILE: i32 = -16;

/// Returns true when a `readdir` error only marks the end of the listing.
fn is_end_of_directory(error: &ssh2::Error) -> bool {
    matches!(error.code(), ErrorCode::Session(LIBSSH2_ERROR_FILE))
}

/// [`DirectoryLister`] over an authenticated SFTP channel.
pub struct SftpLister {
    sftp: Sftp,
}

impl SftpLister {
    /// Wraps an open SFTP channel.
    #[must_use]
    pub fn new(sftp: Sftp) -> Self {
        Self { sftp }
    }

    /// Returns the wrapped channel.
    #[must_use]
    pub fn into_inner(self) -> Sftp {
        self.sftp
    }

    fn classify(file_type: FileType) -> EntryType {
        match file_type {
            FileType::RegularFile => EntryType::RegularFile,
            FileType::Directory => EntryType::Directory,
            _ => EntryType::Other,
        }
    }
}

impl DirectoryLister for SftpLister {
    type Handle = File;

    fn open_directory(&mut self, path: &str) -> Result<File, ListerError> {
        self.sftp
            .opendir(Path::new(path))
            .map_err(|e| ListerError::new(e.message()))
    }

    fn read_next_entry(&mut self, handle: &mut File) -> Result<Option<RawEntry>, ListerError> {
        match handle.readdir() {
            Ok((entry_name, stat)) => {
                // readdir yields bare names, including "." and ".."
                let name = entry_name.to_string_lossy().into_owned();
                Ok(Some(RawEntry {
                    name,
                    entry_type: Self::classify(stat.file_type()),
                }))
            }
            Err(e) if is_end_of_directory(&e) => Ok(None),
            Err(e) => Err(ListerError::new(e.message())),
        }
    }

    fn close_directory(&mut self, mut handle: File) -> Result<(), ListerError> {
        handle.close().map_err(|e| ListerError::new(e.message()))
    }
}
