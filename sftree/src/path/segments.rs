//! Splitting, joining and re-rooting of paths.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::normalize::{remove_prefix, remove_suffix, slice};
use super::SEPARATOR;
use crate::error::{Error, Result};

/// Default upper bound for a full path, in bytes.
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Default upper bound for a single segment, in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// Length bounds enforced by [`join_with_limits`] and [`split_with_limits`].
///
/// Exceeding a bound is an error, never a silent truncation.
///
/// # Examples
///
/// ```
/// use sftree::path::PathLimits;
///
/// let limits = PathLimits::default();
/// assert_eq!(limits.max_path_len, 4096);
/// assert_eq!(limits.max_name_len, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLimits {
    /// Maximum length of a joined path.
    pub max_path_len: usize,
    /// Maximum length of one segment.
    pub max_name_len: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// Join paths with [`PathLimits::default`].
///
/// # Errors
///
/// Returns [`Error::PathTooLong`] if the result exceeds the default limit.
///
/// # Examples
///
/// ```
/// use sftree::path::join;
///
/// assert_eq!(join(["a", "b", "c"]).unwrap(), "a/b/c");
/// assert_eq!(join(["./a/", "/b//", "c"]).unwrap(), "a/b/c");
/// assert_eq!(join(["/srv", "data/", "file.txt"]).unwrap(), "/srv/data/file.txt");
/// ```
pub fn join<I, S>(parts: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with_limits(parts, &PathLimits::default())
}

/// Join multiple paths into a single path.
///
/// Each part is cleaned with [`remove_prefix`] and [`remove_suffix`], then
/// the parts are concatenated with exactly one separator. The first part
/// decides whether the result is rooted: it is when the part as given starts
/// with the separator, or when it is the empty string and more parts follow
/// (the shape [`split`] produces for an absolute path). A leading `"."` or
/// `"./"` part is dropped and parts that are empty after cleaning contribute
/// nothing.
///
/// # Errors
///
/// Returns [`Error::PathTooLong`] as soon as the result would exceed
/// `limits.max_path_len`.
pub fn join_with_limits<I, S>(parts: I, limits: &PathLimits) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    let mut rooted = false;
    let mut parts = parts.into_iter().peekable();
    let mut first = true;

    while let Some(part) = parts.next() {
        let raw = part.as_ref();
        let prefixed = remove_prefix(raw);
        let cleaned = remove_suffix(&prefixed);
        let mut segment: &str = &cleaned;

        if first {
            first = false;
            let more = parts.peek().is_some();
            // Decided on the raw part: "./" also cleans to "" but is relative.
            rooted = raw.starts_with(SEPARATOR) || (raw.is_empty() && more);
            if segment == "." && more {
                segment = "";
            }
        }

        let segment = segment.trim_start_matches(SEPARATOR);
        if segment.is_empty() {
            continue;
        }

        if rooted || !joined.is_empty() {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment);

        if joined.len() > limits.max_path_len {
            return Err(Error::PathTooLong {
                path: joined,
                limit: limits.max_path_len,
            });
        }
    }

    if rooted && joined.is_empty() {
        joined.push(SEPARATOR);
    }

    Ok(joined)
}

/// Split a path with [`PathLimits::default`].
///
/// # Errors
///
/// Returns [`Error::NameTooLong`] if any segment exceeds the default limit.
///
/// # Examples
///
/// ```
/// use sftree::path::split;
///
/// assert_eq!(split("this/is/a/path").unwrap(), vec!["this", "is", "a", "path"]);
/// assert_eq!(split("/abs").unwrap(), vec!["", "abs"]);
/// assert_eq!(split("dir/").unwrap(), vec!["dir", ""]);
/// ```
pub fn split(path: &str) -> Result<Vec<String>> {
    split_with_limits(path, &PathLimits::default())
}

/// Split a path string into its segments.
///
/// Every separator closes the current segment, even an empty one, and the
/// final segment is always pushed. A path with `n` separators therefore
/// yields `n + 1` segments.
///
/// # Errors
///
/// Returns [`Error::NameTooLong`] if a segment exceeds `limits.max_name_len`.
pub fn split_with_limits(path: &str, limits: &PathLimits) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in path.chars() {
        if ch == SEPARATOR {
            segments.push(std::mem::take(&mut current));
            continue;
        }

        current.push(ch);
        if current.len() > limits.max_name_len {
            return Err(Error::NameTooLong {
                segment: current,
                limit: limits.max_name_len,
            });
        }
    }
    segments.push(current);

    Ok(segments)
}

/// Replace the top-level segment (the grandparent) of a path.
///
/// For `/this/is/a/path` and `/new` the result is `/new/is/a/path`. A
/// leading root separator is not a segment, so it is skipped before the
/// search. Paths shorter than three bytes, or with nothing after their
/// first segment, are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::PathTooLong`] if the rewritten path exceeds the default
/// limit.
///
/// # Examples
///
/// ```
/// use sftree::path::replace_grandparent;
///
/// assert_eq!(replace_grandparent("/old/mid/leaf", "/new").unwrap(), "/new/mid/leaf");
/// assert_eq!(replace_grandparent("src/lib.rs", "backup").unwrap(), "backup/lib.rs");
/// assert_eq!(replace_grandparent("leaf", "/new").unwrap(), "leaf");
/// ```
pub fn replace_grandparent<'a>(path: &'a str, new_grandparent: &str) -> Result<Cow<'a, str>> {
    if path.len() < 3 {
        return Ok(Cow::Borrowed(path));
    }

    let body_start = path.len() - path.trim_start_matches(SEPARATOR).len();
    let Some(offset) = path[body_start..].find(SEPARATOR) else {
        return Ok(Cow::Borrowed(path));
    };
    let slash_index = body_start + offset;

    let rest = if slash_index + 1 < path.len() {
        slice(path, slash_index + 1, path.len())?
    } else {
        String::new()
    };

    Ok(Cow::Owned(join([new_grandparent, rest.as_str()])?))
}
