//! Reading one directory level into a list of entries.

use super::DirectoryLister;
use crate::entry::FileSystemEntry;
use crate::error::{Error, Result};
use crate::list::GrowableList;
use crate::path::{join_with_limits, PathLimits};

/// Read one directory level with [`PathLimits::default`].
///
/// # Errors
///
/// See [`read_directory_with_limits`].
pub fn read_directory<L>(lister: &mut L, path: &str) -> Result<GrowableList<FileSystemEntry>>
where
    L: DirectoryLister + ?Sized,
{
    read_directory_with_limits(lister, path, &PathLimits::default())
}

/// Read the contents of a directory and return its files and directories.
///
/// Each entry is named by joining `path` with the raw entry name. Regular
/// files and directories are kept; any other type is skipped with an info
/// log. The handle is always closed, and the result is all or nothing: a
/// failed close discards the entries already collected.
///
/// # Errors
///
/// - [`Error::DirectoryOpen`] if the lister cannot open `path`
/// - [`Error::DirectoryRead`] if the listing breaks off before its end
/// - [`Error::DirectoryClose`] if the lister does not close cleanly
/// - a length or allocation error if an entry cannot be built
pub fn read_directory_with_limits<L>(
    lister: &mut L,
    path: &str,
    limits: &PathLimits,
) -> Result<GrowableList<FileSystemEntry>>
where
    L: DirectoryLister + ?Sized,
{
    let mut handle = lister.open_directory(path).map_err(|e| {
        log::error!("Couldn't open directory `{path}`: {e}");
        Error::DirectoryOpen {
            path: path.to_string(),
            message: e.message,
        }
    })?;

    let mut entries = GrowableList::new(1)?;
    let collected = collect_entries(lister, &mut handle, path, limits, &mut entries);
    let closed = lister.close_directory(handle);

    collected?;
    closed.map_err(|e| {
        log::error!("Couldn't close directory `{path}`: {e}");
        Error::DirectoryClose {
            path: path.to_string(),
            message: e.message,
        }
    })?;

    log::debug!("Read {} entries from `{path}`", entries.len());
    Ok(entries)
}

fn collect_entries<L>(
    lister: &mut L,
    handle: &mut L::Handle,
    path: &str,
    limits: &PathLimits,
    entries: &mut GrowableList<FileSystemEntry>,
) -> Result<()>
where
    L: DirectoryLister + ?Sized,
{
    // An empty directory path names the current directory, not the root.
    let parent = if path.is_empty() { "." } else { path };
    while let Some(raw) = lister.read_next_entry(handle).map_err(|e| {
        log::error!("Couldn't read directory `{path}`: {e}");
        Error::DirectoryRead {
            path: path.to_string(),
            message: e.message,
        }
    })? {
        if !raw.entry_type.is_supported() {
            log::info!("Ignoring filetype {} for `{}`", raw.entry_type, raw.name);
            continue;
        }

        let entry_path = join_with_limits([parent, raw.name.as_str()], limits)?;
        let entry = FileSystemEntry::from_path_with_limits(&entry_path, raw.entry_type, limits)?;
        FileSystemEntry::append_to_list(entries, &entry)?;
    }
    Ok(())
}
