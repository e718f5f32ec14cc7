//! Reroot command implementation.

use crate::error::CliError;
use crate::utils::{print_lines, GlobalOptions};
use clap::Args;
use sftree::path::replace_grandparent;

/// Replace the top-level segment of a path.
///
/// `/old/mid/leaf` rerooted at `/new` becomes `/new/mid/leaf`. A path with
/// a single segment is printed unchanged.
#[derive(Args)]
pub struct RerootCommand {
    /// Path to reroot
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Replacement for the top-level segment
    #[arg(value_name = "ROOT")]
    pub root: String,
}

impl RerootCommand {
    /// Execute the reroot command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let rerooted = replace_grandparent(&self.path, &self.root)?;
        print_lines([rerooted])
    }
}
