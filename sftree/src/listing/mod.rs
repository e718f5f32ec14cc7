//! Directory listing through an external collaborator.
//!
//! The [`DirectoryLister`] trait is the only way this crate enumerates a
//! directory. [`read_directory`] drives a lister through one directory level
//! and materializes the entries it keeps.
//!
//! Two listers are provided:
//! - [`LocalLister`] reads the local filesystem with `std::fs`.
//! - `SftpLister` (feature `sftp`) reads a remote tree over an already
//!   authenticated `ssh2::Sftp` channel.
//!
//! # Examples
//!
//! ```
//! use sftree::listing::{read_directory, LocalLister};
//!
//! let temp = tempfile::tempdir().unwrap();
//! std::fs::write(temp.path().join("a.txt"), b"a").unwrap();
//! std::fs::create_dir(temp.path().join("sub")).unwrap();
//!
//! let root = temp.path().display().to_string();
//! let entries = read_directory(&mut LocalLister, &root).unwrap();
//! assert_eq!(entries.len(), 2);
//! ```

pub mod local;
pub mod reader;
#[cfg(feature = "sftp")]
pub mod sftp;

use thiserror::Error;

use crate::entry::EntryType;

pub use local::LocalLister;
pub use reader::{read_directory, read_directory_with_limits};
#[cfg(feature = "sftp")]
pub use sftp::SftpLister;

/// Diagnostic reported by a lister when an open, read or close fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ListerError {
    /// Human-readable diagnostic from the transport.
    pub message: String,
}

impl ListerError {
    /// Creates a lister error from any diagnostic text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One raw directory entry as reported by a lister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Bare entry name, without its directory.
    pub name: String,
    /// Type reported by the transport.
    pub entry_type: EntryType,
}

impl RawEntry {
    /// Creates a raw entry.
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            name: name.into(),
            entry_type,
        }
    }
}

/// Enumerates the entries of one directory.
///
/// A directory goes through `open_directory`, any number of
/// `read_next_entry` calls until `Ok(None)` (end of directory), then
/// `close_directory`, which consumes the handle.
#[cfg_attr(test, mockall::automock(type Handle = u32;))]
pub trait DirectoryLister {
    /// Open directory handle.
    type Handle;

    /// Opens `path` for listing.
    ///
    /// # Errors
    ///
    /// Returns the transport diagnostic if the directory cannot be opened.
    fn open_directory(&mut self, path: &str) -> Result<Self::Handle, ListerError>;

    /// Returns the next entry, or `None` at end of directory.
    ///
    /// # Errors
    ///
    /// Returns the transport diagnostic if the listing breaks off before
    /// its end.
    fn read_next_entry(
        &mut self,
        handle: &mut Self::Handle,
    ) -> Result<Option<RawEntry>, ListerError>;

    /// Closes a handle returned by `open_directory`.
    ///
    /// # Errors
    ///
    /// Returns the transport diagnostic if the close does not succeed.
    fn close_directory(&mut self, handle: Self::Handle) -> Result<(), ListerError>;
}
