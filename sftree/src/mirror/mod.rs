//! Mirroring a directory tree into a local skeleton.
//!
//! Mirroring is split into two phases:
//! 1. **Planning**: walks the source tree through a
//!    [`DirectoryLister`](crate::listing::DirectoryLister) and records one
//!    action per directory and file
//! 2. **Execution**: creates the planned directories through a
//!    [`LocalFilesystem`](crate::path::LocalFilesystem)
//!
//! File contents are never transferred; files only show up in the plan.
//!
//! # Examples
//!
//! ```
//! use sftree::listing::LocalLister;
//! use sftree::mirror::{MirrorExecutor, MirrorOptions, MirrorPlan};
//! use sftree::path::StdFilesystem;
//!
//! let source = tempfile::tempdir().unwrap();
//! std::fs::create_dir_all(source.path().join("a/b")).unwrap();
//! let destination = tempfile::tempdir().unwrap();
//! let target = format!("{}/copy", destination.path().display());
//!
//! let plan = MirrorPlan::build(
//!     &mut LocalLister,
//!     &source.path().display().to_string(),
//!     &target,
//!     &MirrorOptions::new(),
//! )
//! .unwrap();
//!
//! let result = MirrorExecutor::new(&mut StdFilesystem).execute(&plan).unwrap();
//! assert_eq!(result.directories_created, 3);
//! assert!(destination.path().join("copy/a/b").is_dir());
//! ```

pub mod executor;
pub mod plan;

pub use executor::{MirrorExecutor, MirrorResult, DEFAULT_DIRECTORY_MODE};
pub use plan::{MirrorOptions, MirrorPlan, PlanAction};
