#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sftree
//!
//! Path manipulation and directory walking for mirroring a remote file
//! tree into a local one.
//!
//! ## Core Types
//!
//! - [`path`]: `/`-separated path cleaning, joining, splitting and re-rooting
//! - [`GrowableList`]: a fallible growable list with a fixed growth policy
//! - [`FileSystemEntry`] and [`EntryType`]: one file or directory of a walk
//! - [`listing::DirectoryLister`]: the seam to a local or SFTP namespace
//! - [`mirror`]: plan and execute a directory skeleton mirror
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sftree::path::{join, split};
//!
//! let segments = split("/srv//data/").unwrap();
//! assert_eq!(segments, vec!["", "srv", "", "data", ""]);
//! assert_eq!(join(&segments).unwrap(), "/srv/data");
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod list;
pub mod listing;
pub mod logging;
pub mod mirror;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use entry::{EntryType, FileSystemEntry};
pub use error::{Error, Result};
pub use list::GrowableList;
pub use listing::{read_directory, DirectoryLister, LocalLister, RawEntry};
pub use logging::{init_logger, LogLevel, Logger};
pub use mirror::{MirrorExecutor, MirrorOptions, MirrorPlan, MirrorResult, PlanAction};
pub use path::PathLimits;
