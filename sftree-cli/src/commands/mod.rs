//! CLI command implementations.
//!
//! - `ls`: List one directory level
//! - `split`: Split a path into segments
//! - `join`: Join segments into a clean path
//! - `reroot`: Replace a path's top-level segment
//! - `mirror`: Recreate a tree's directory skeleton
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod join;
pub mod ls;
pub mod mirror;
pub mod reroot;
pub mod split;
pub mod validate;

pub use completions::CompletionsCommand;
pub use join::JoinCommand;
pub use ls::LsCommand;
pub use mirror::MirrorCommand;
pub use reroot::RerootCommand;
pub use split::SplitCommand;
pub use validate::ValidateCommand;
