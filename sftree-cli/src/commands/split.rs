//! Split command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, print_json, print_lines, GlobalOptions, OutputFormat};
use clap::Args;
use sftree::path::split_with_limits;

/// Split a path into its segments.
///
/// Every separator ends a segment, so doubled separators produce empty
/// segments and an absolute path starts with one.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl SplitCommand {
    /// Execute the split command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let segments = split_with_limits(&self.path, &config.effective_limits())?;

        match self.format {
            OutputFormat::Text => print_lines(&segments),
            OutputFormat::Json => print_json(&segments),
        }
    }
}
