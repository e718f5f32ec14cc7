//! Classification of dotted and hidden names.

/// Check if a path is one of the dotted directory references `.` or `..`.
///
/// # Examples
///
/// ```
/// use sftree::path::is_dotted;
///
/// assert!(is_dotted("."));
/// assert!(is_dotted(".."));
/// assert!(!is_dotted("..."));
/// assert!(!is_dotted(".git"));
/// ```
#[must_use]
pub fn is_dotted(path: &str) -> bool {
    path.len() <= 2 && (path == "." || path == "..")
}

/// Check if a path is hidden, i.e. starts with a `.`.
///
/// Dotted references count as hidden too; callers that walk a tree are
/// expected to test [`is_dotted`] first.
///
/// # Examples
///
/// ```
/// use sftree::path::is_hidden;
///
/// assert!(is_hidden(".git"));
/// assert!(is_hidden(".hidden/"));
/// assert!(!is_hidden("git"));
/// assert!(!is_hidden(""));
/// ```
#[must_use]
pub fn is_hidden(path: &str) -> bool {
    path.starts_with('.')
}
