//! String-level path handling for mirrored trees.
//!
//! Paths in this crate are plain `str` values using a single fixed
//! separator ([`SEPARATOR`]). They are never interpreted through
//! `std::path`, because the same string must address both a local tree and
//! a remotely enumerated one whose platform conventions may differ.
//!
//! # Key Concepts
//!
//! ## Cleaning
//!
//! [`remove_prefix`] and [`remove_suffix`] strip redundant leading and
//! trailing separators. A lone leading separator marking the root is kept,
//! a leading `./` is dropped. Both return [`Cow::Borrowed`] when the input
//! is already clean.
//!
//! ## Segments
//!
//! [`split`] breaks a path into segments with one push per separator plus a
//! final push, so absolute paths start with an empty segment and trailing
//! separators end with one. [`join`] cleans each part and glues the result
//! with exactly one separator.
//!
//! ## Re-rooting
//!
//! [`replace_grandparent`] swaps the top-level segment of a path for a new
//! root, moving everything below it under that root unchanged.
//!
//! # Examples
//!
//! ```
//! use sftree::path::{join, replace_grandparent, split};
//!
//! assert_eq!(join(["./a/", "/b//", "c"]).unwrap(), "a/b/c");
//! assert_eq!(split("/a//b").unwrap(), vec!["", "a", "", "b"]);
//! assert_eq!(
//!     replace_grandparent("/old/mid/leaf", "/new").unwrap(),
//!     "/new/mid/leaf"
//! );
//! ```
//!
//! [`Cow::Borrowed`]: std::borrow::Cow::Borrowed

pub mod classify;
pub mod mkdir;
pub mod normalize;
pub mod segments;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// The path separator used by every operation in this module.
pub const SEPARATOR: char = '/';

pub use classify::{is_dotted, is_hidden};
pub use mkdir::{mkdir_parents, LocalFilesystem, PathState, StdFilesystem};
pub use normalize::{remove_prefix, remove_suffix, slice};
pub use segments::{
    join, join_with_limits, replace_grandparent, split, split_with_limits, PathLimits,
};
