//! Filesystem entries as seen by a directory walk.
//!
//! A [`FileSystemEntry`] is built from a path string and the type reported
//! by the lister. It owns every string it holds, so an entry stored in a
//! [`GrowableList`] never depends on the entry it was copied from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::list::GrowableList;
use crate::path::{self, PathLimits, SEPARATOR};

/// Classification of a filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// A regular file.
    RegularFile,
    /// A directory.
    Directory,
    /// Anything else (symlinks, sockets, devices). Ignored by walks.
    Other,
}

impl EntryType {
    /// Returns true for the types a walk keeps.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::RegularFile | Self::Directory)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegularFile => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One file or directory.
///
/// Exactly one of `relative_path` and `absolute_path` is set after
/// [`FileSystemEntry::from_path`]; the parent fields stay empty until
/// [`FileSystemEntry::derive_ancestors`] fills them.
///
/// # Examples
///
/// ```
/// use sftree::{EntryType, FileSystemEntry};
///
/// let entry = FileSystemEntry::from_path("/srv/data/report.txt", EntryType::RegularFile).unwrap();
/// assert_eq!(entry.name(), "report.txt");
/// assert_eq!(entry.absolute_path(), Some("/srv/data/report.txt"));
/// assert_eq!(entry.relative_path(), None);
/// assert!(entry.is_file());
/// ```
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystemEntry {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    relative_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    absolute_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grandparent_path: Option<String>,
    entry_type: EntryType,
}

/// Copies `value` into a freshly reserved string.
fn owned_copy(value: &str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(value.len())
        .map_err(|source| Error::AllocationFailure {
            requested: value.len(),
            source,
        })?;
    owned.push_str(value);
    Ok(owned)
}

impl FileSystemEntry {
    /// Create an entry from a path using [`PathLimits::default`].
    ///
    /// # Errors
    ///
    /// Returns a length error if the path or its name is too long, or
    /// [`Error::AllocationFailure`] if a field cannot be allocated.
    pub fn from_path(path: &str, entry_type: EntryType) -> Result<Self> {
        Self::from_path_with_limits(path, entry_type, &PathLimits::default())
    }

    /// Create an entry from a path, enforcing `limits`.
    ///
    /// The path is stored as absolute when it starts with the separator and
    /// as relative otherwise. The name is the final segment of the path.
    ///
    /// # Errors
    ///
    /// See [`FileSystemEntry::from_path`].
    pub fn from_path_with_limits(
        path: &str,
        entry_type: EntryType,
        limits: &PathLimits,
    ) -> Result<Self> {
        if path.len() > limits.max_path_len {
            return Err(Error::PathTooLong {
                path: path.to_string(),
                limit: limits.max_path_len,
            });
        }

        let mut segments = path::split_with_limits(path, limits)?;
        let name = segments.pop().unwrap_or_default();
        let stored = owned_copy(path)?;

        let (relative_path, absolute_path) = if path.starts_with(SEPARATOR) {
            (None, Some(stored))
        } else {
            (Some(stored), None)
        };

        Ok(Self {
            name,
            relative_path,
            absolute_path,
            parent_path: None,
            grandparent_path: None,
            entry_type,
        })
    }

    /// Copy the identity of this entry (`name` and `relative_path`) into
    /// `destination`.
    ///
    /// Nothing else is copied: the absolute path, ancestor fields and type
    /// of `destination` are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a copy cannot be allocated.
    pub fn copy_identity_only(&self, destination: &mut Self) -> Result<()> {
        destination.name = owned_copy(&self.name)?;
        destination.relative_path = self.relative_path.as_deref().map(owned_copy).transpose()?;
        Ok(())
    }

    /// Append an independent copy of `entry` to `list`.
    ///
    /// A fresh entry is built from the path and type of `entry`, then its
    /// identity is copied over. The caller's entry is never stored, so it
    /// may be dropped right after.
    ///
    /// # Errors
    ///
    /// Returns an error if the fresh entry cannot be built or the list
    /// cannot grow. The list is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sftree::{EntryType, FileSystemEntry, GrowableList};
    ///
    /// let mut list = GrowableList::new(1).unwrap();
    /// let entry = FileSystemEntry::from_path("docs/readme.md", EntryType::RegularFile).unwrap();
    /// FileSystemEntry::append_to_list(&mut list, &entry).unwrap();
    /// drop(entry);
    ///
    /// assert_eq!(list[0].name(), "readme.md");
    /// ```
    pub fn append_to_list(list: &mut GrowableList<Self>, entry: &Self) -> Result<()> {
        let mut fresh = Self::from_path(entry.path(), entry.entry_type)?;
        entry.copy_identity_only(&mut fresh)?;
        list.append(fresh)
    }

    /// Fill `parent_path` and `grandparent_path` from the stored path.
    ///
    /// The parent drops the last segment, the grandparent the last two.
    /// A level that would climb above the start of the path stays unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a rewritten path cannot be built.
    pub fn derive_ancestors(&mut self) -> Result<()> {
        let segments = path::split(self.path())?;
        let absolute = self.path().starts_with(SEPARATOR);
        let ancestor = |levels: usize| -> Result<Option<String>> {
            if segments.len() <= levels {
                return Ok(None);
            }
            let joined = path::join(&segments[..segments.len() - levels])?;
            if joined.is_empty() {
                // Only the root is left
                return Ok(absolute.then(|| SEPARATOR.to_string()));
            }
            Ok(Some(joined))
        };

        self.parent_path = ancestor(1)?;
        self.grandparent_path = ancestor(2)?;
        Ok(())
    }

    /// Final path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path, when it was given in relative form.
    #[must_use]
    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    /// The path, when it was given in absolute form.
    #[must_use]
    pub fn absolute_path(&self) -> Option<&str> {
        self.absolute_path.as_deref()
    }

    /// Parent directory, once derived.
    #[must_use]
    pub fn parent_path(&self) -> Option<&str> {
        self.parent_path.as_deref()
    }

    /// Grandparent directory, once derived.
    #[must_use]
    pub fn grandparent_path(&self) -> Option<&str> {
        self.grandparent_path.as_deref()
    }

    /// Whichever path form is populated.
    #[must_use]
    pub fn path(&self) -> &str {
        self.relative_path
            .as_deref()
            .or(self.absolute_path.as_deref())
            .unwrap_or_default()
    }

    /// The entry's type.
    #[must_use]
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Returns true for regular files.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::RegularFile
    }

    /// Returns true for directories.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    /// Returns true when the name starts with a dot.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        path::is_hidden(&self.name)
    }

    /// Returns true when the name is `.` or `..`.
    #[must_use]
    pub fn is_dotted(&self) -> bool {
        path::is_dotted(&self.name)
    }
}
