//! Creation of missing parent directories on the local side.
//!
//! The local filesystem is reached through the [`LocalFilesystem`] trait so
//! that mirroring can be planned and exercised without touching disk.

use std::fs;
use std::io;

use super::segments::{join_with_limits, split_with_limits, PathLimits};
use crate::error::{Error, Result};

/// Whether a path is present on the local filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    /// Something exists at the path.
    Exists,
    /// Nothing exists at the path, or it cannot be inspected.
    NotFound,
}

/// The local filesystem operations needed to build a directory skeleton.
#[cfg_attr(test, mockall::automock)]
pub trait LocalFilesystem {
    /// Reports whether `path` exists.
    fn stat_path(&self, path: &str) -> PathState;

    /// Creates a single directory with the given permission bits.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be created.
    fn make_directory(&mut self, path: &str, mode: u32) -> io::Result<()>;
}

/// [`LocalFilesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl LocalFilesystem for StdFilesystem {
    fn stat_path(&self, path: &str) -> PathState {
        if fs::metadata(path).is_ok() {
            PathState::Exists
        } else {
            PathState::NotFound
        }
    }

    fn make_directory(&mut self, path: &str, mode: u32) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        builder.create(path)
    }
}

/// Create `path` and every missing ancestor of it.
///
/// Ancestors are visited from the top down; each one that does not exist
/// is created with `mode`. Returns the number of directories created.
///
/// # Errors
///
/// Returns [`Error::DirectoryCreate`] on the first directory that cannot be
/// created, or a length error if `path` violates `limits`.
///
/// # Examples
///
/// ```
/// use sftree::path::{mkdir_parents, PathLimits, StdFilesystem};
///
/// let temp = tempfile::tempdir().unwrap();
/// let target = format!("{}/a/b/c", temp.path().display());
///
/// let created = mkdir_parents(&mut StdFilesystem, &target, 0o755, &PathLimits::default()).unwrap();
/// assert_eq!(created, 3);
/// assert!(std::path::Path::new(&target).is_dir());
/// ```
pub fn mkdir_parents<F>(fs: &mut F, path: &str, mode: u32, limits: &PathLimits) -> Result<usize>
where
    F: LocalFilesystem + ?Sized,
{
    let segments = split_with_limits(path, limits)?;
    let mut created = 0;
    let mut previous = String::new();

    for depth in 1..=segments.len() {
        let prefix = join_with_limits(&segments[..depth], limits)?;
        if prefix.is_empty() || prefix == "/" || prefix == "." || prefix == previous {
            continue;
        }

        if fs.stat_path(&prefix) == PathState::NotFound {
            if let Err(source) = fs.make_directory(&prefix, mode) {
                log::error!("Couldn't create directory {prefix}: {source}");
                return Err(Error::DirectoryCreate {
                    path: prefix,
                    source,
                });
            }
            log::debug!("Created directory {prefix}");
            created += 1;
        }
        previous = prefix;
    }

    Ok(created)
}
