//! Path cleaning functions.
//!
//! This module provides the low-level building blocks used by `join`:
//! - Checked slicing of a path by byte offsets
//! - Removal of redundant leading separators and `./`
//! - Removal of trailing separators

use std::borrow::Cow;

use super::SEPARATOR;
use crate::error::{Error, Result};

const CURRENT_DIR_PREFIX: &str = "./";

/// Returns the owned substring `[start, stop)` of `path`.
///
/// # Errors
///
/// Returns [`Error::SliceRangeInvalid`] unless `start < stop <= path.len()`
/// and both offsets fall on character boundaries.
///
/// # Examples
///
/// ```
/// use sftree::path::slice;
///
/// assert_eq!(slice("/this/is", 1, 5).unwrap(), "this");
/// assert!(slice("/this/is", 3, 3).is_err());
/// assert!(slice("/this/is", 2, 40).is_err());
/// ```
pub fn slice(path: &str, start: usize, stop: usize) -> Result<String> {
    let invalid = || Error::SliceRangeInvalid {
        start,
        stop,
        length: path.len(),
    };

    if start >= stop || stop > path.len() {
        return Err(invalid());
    }

    path.get(start..stop).map(str::to_owned).ok_or_else(invalid)
}

/// Remove redundant prefixes from a path.
///
/// A single leading `./` is dropped together with every separator that
/// follows it. Otherwise a run of leading separators collapses to one, so a
/// root marker survives: `"////this"` becomes `"/this"` and `"./this"`
/// becomes `"this"`. Paths shorter than two bytes are returned unchanged.
///
/// # Examples
///
/// ```
/// use sftree::path::remove_prefix;
///
/// assert_eq!(remove_prefix("./this"), "this");
/// assert_eq!(remove_prefix(".//this"), "this");
/// assert_eq!(remove_prefix("////this"), "/this");
/// assert_eq!(remove_prefix("this"), "this");
/// ```
#[must_use]
pub fn remove_prefix(path: &str) -> Cow<'_, str> {
    if path.len() < 2 {
        return Cow::Borrowed(path);
    }

    if let Some(rest) = path.strip_prefix(CURRENT_DIR_PREFIX) {
        return Cow::Owned(rest.trim_start_matches(SEPARATOR).to_owned());
    }

    let leading = path.len() - path.trim_start_matches(SEPARATOR).len();
    if leading > 1 {
        Cow::Owned(path[leading - 1..].to_owned())
    } else {
        Cow::Borrowed(path)
    }
}

/// Remove trailing separators from a path.
///
/// `"this/"` and `"this////"` both become `"this"`. A path made only of
/// separators collapses to the root `"/"`. Paths shorter than two bytes are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use sftree::path::remove_suffix;
///
/// assert_eq!(remove_suffix("this////"), "this");
/// assert_eq!(remove_suffix("/"), "/");
/// assert_eq!(remove_suffix("///"), "/");
/// ```
#[must_use]
pub fn remove_suffix(path: &str) -> Cow<'_, str> {
    if path.len() < 2 {
        return Cow::Borrowed(path);
    }

    let bytes = path.as_bytes();
    let mut end = bytes.len();
    while end > 0 && char::from(bytes[end - 1]) == SEPARATOR {
        end -= 1;
    }

    if end == bytes.len() {
        Cow::Borrowed(path)
    } else if end == 0 {
        Cow::Owned(SEPARATOR.to_string())
    } else {
        Cow::Owned(path[..end].to_owned())
    }
}
