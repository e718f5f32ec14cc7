//! Error types for the sftree library.
//!
//! This module provides the error hierarchy for path handling, directory
//! listing and mirroring, using `thiserror` for ergonomic error handling.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an sftree error.
///
/// # Examples
///
/// ```
/// use sftree::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sftree library.
#[derive(Debug, Error)]
pub enum Error {
    /// A buffer or list could not be grown.
    #[error("allocation failure: could not reserve {requested} element(s)")]
    AllocationFailure {
        /// The number of additional elements requested.
        requested: usize,
        /// The underlying reservation error.
        #[source]
        source: TryReserveError,
    },

    /// Degenerate or out-of-range slice bounds.
    #[error("invalid slice [{start}, {stop}) of path with length {length}")]
    SliceRangeInvalid {
        /// Inclusive start index.
        start: usize,
        /// Exclusive stop index.
        stop: usize,
        /// Length of the sliced path.
        length: usize,
    },

    /// A joined or constructed path exceeds the configured limit.
    #[error("path exceeds {limit} bytes: {path}")]
    PathTooLong {
        /// The path (possibly partial) that overflowed.
        path: String,
        /// The configured maximum.
        limit: usize,
    },

    /// A single path segment exceeds the configured limit.
    #[error("path segment exceeds {limit} bytes: {segment}")]
    NameTooLong {
        /// The offending segment.
        segment: String,
        /// The configured maximum.
        limit: usize,
    },

    /// The directory lister could not open a directory.
    #[error("couldn't open directory `{path}`: {message}")]
    DirectoryOpen {
        /// The directory that failed to open.
        path: String,
        /// Diagnostic text from the lister.
        message: String,
    },

    /// The directory lister broke off before the end of a listing.
    #[error("couldn't read directory `{path}`: {message}")]
    DirectoryRead {
        /// The directory being listed.
        path: String,
        /// Diagnostic text from the lister.
        message: String,
    },

    /// The directory lister did not report a clean close.
    #[error("couldn't close directory `{path}`: {message}")]
    DirectoryClose {
        /// The directory that failed to close.
        path: String,
        /// Diagnostic text from the lister.
        message: String,
    },

    /// A local directory could not be created.
    #[error("couldn't create directory `{path}`: {source}")]
    DirectoryCreate {
        /// The directory that failed to be created.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error came from the directory lister.
    ///
    /// # Examples
    ///
    /// ```
    /// use sftree::Error;
    ///
    /// let err = Error::DirectoryOpen {
    ///     path: "/srv".to_string(),
    ///     message: "permission denied".to_string(),
    /// };
    /// assert!(err.is_listing_error());
    /// ```
    #[must_use]
    pub fn is_listing_error(&self) -> bool {
        matches!(
            self,
            Self::DirectoryOpen { .. }
                | Self::DirectoryRead { .. }
                | Self::DirectoryClose { .. }
        )
    }

    /// Check if the error is a path or segment length overflow.
    #[must_use]
    pub fn is_length_error(&self) -> bool {
        matches!(self, Self::PathTooLong { .. } | Self::NameTooLong { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_range_invalid_error() {
        let err = Error::SliceRangeInvalid {
            start: 4,
            stop: 2,
            length: 10,
        };
        let display = format!("{err}");
        assert!(display.contains("invalid slice"));
        assert!(display.contains("[4, 2)"));
        assert!(display.contains("10"));
    }

    #[test]
    fn test_path_too_long_error() {
        let err = Error::PathTooLong {
            path: "a/b/c".to_string(),
            limit: 3,
        };
        let display = format!("{err}");
        assert!(display.contains("exceeds 3 bytes"));
        assert!(display.contains("a/b/c"));
        assert!(err.is_length_error());
    }

    #[test]
    fn test_name_too_long_error() {
        let err = Error::NameTooLong {
            segment: "abcdef".to_string(),
            limit: 4,
        };
        assert!(format!("{err}").contains("segment exceeds 4 bytes"));
        assert!(err.is_length_error());
        assert!(!err.is_listing_error());
    }

    #[test]
    fn test_directory_errors() {
        let open = Error::DirectoryOpen {
            path: "/srv/data".to_string(),
            message: "no such file".to_string(),
        };
        assert!(format!("{open}").contains("couldn't open directory `/srv/data`"));
        assert!(open.is_listing_error());

        let close = Error::DirectoryClose {
            path: "/srv/data".to_string(),
            message: "handle lost".to_string(),
        };
        assert!(format!("{close}").contains("handle lost"));
        assert!(close.is_listing_error());

        let read = Error::DirectoryRead {
            path: "/srv/data".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(
            format!("{read}"),
            "couldn't read directory `/srv/data`: connection reset"
        );
        assert!(read.is_listing_error());
    }

    #[test]
    fn test_directory_create_error() {
        let err = Error::DirectoryCreate {
            path: "out/a".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = format!("{err}");
        assert!(display.contains("couldn't create directory `out/a`"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_allocation_failure_error() {
        let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = Error::AllocationFailure {
            requested: usize::MAX,
            source,
        };
        assert!(format!("{err}").contains("allocation failure"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "limits.max_path_len".to_string(),
            message: "must be positive".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("limits.max_path_len"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
