//! Join command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, print_lines, GlobalOptions};
use clap::Args;
use sftree::path::join_with_limits;

/// Join path segments into one clean path.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join, in order
    #[arg(value_name = "PARTS", required = true, allow_hyphen_values = true)]
    pub parts: Vec<String>,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let joined = join_with_limits(&self.parts, &config.effective_limits())?;
        print_lines([joined])
    }
}
