//! List command implementation.
//!
//! Reads one directory level and prints its files and directories.

use crate::error::CliError;
use crate::utils::{load_configuration, print_json, print_lines, GlobalOptions, OutputFormat};
use clap::Args;
use sftree::listing::{read_directory_with_limits, LocalLister};
use sftree::FileSystemEntry;

/// List the files and directories in a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// Include hidden entries
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Read the directory
        let listed = read_directory_with_limits(
            &mut LocalLister,
            &self.path,
            &config.effective_limits(),
        )?;

        // 3. Filter and fill in ancestors
        let mut entries: Vec<FileSystemEntry> = listed
            .into_vec()
            .into_iter()
            .filter(|e| !e.is_dotted() && (self.all || !e.is_hidden()))
            .collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        for entry in &mut entries {
            entry.derive_ancestors()?;
        }

        // 4. Output
        match self.format {
            OutputFormat::Text => print_lines(entries.iter().map(format_entry)),
            OutputFormat::Json => print_json(&entries),
        }
    }
}

/// Directories get a trailing separator, like `ls -p`.
fn format_entry(entry: &FileSystemEntry) -> String {
    if entry.is_dir() {
        format!("{}/", entry.name())
    } else {
        entry.name().to_string()
    }
}
