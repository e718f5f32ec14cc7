//! Mirror command implementation.
//!
//! Plans a walk of the source tree and recreates its directories under the
//! destination. File contents are never copied.

use crate::error::CliError;
use crate::utils::{load_configuration, print_lines, GlobalOptions};
use clap::Args;
use sftree::listing::LocalLister;
use sftree::mirror::{MirrorExecutor, MirrorOptions, MirrorPlan, MirrorResult};
use sftree::path::StdFilesystem;

/// Recreate a directory tree's skeleton somewhere else.
#[derive(Args)]
pub struct MirrorCommand {
    /// Tree to walk
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Where to recreate it
    #[arg(value_name = "DEST")]
    pub destination: String,

    /// Show what would be created without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Walk into hidden entries
    #[arg(long)]
    pub include_hidden: bool,

    /// Number of directory levels below SOURCE to read
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

impl MirrorCommand {
    /// Execute the mirror command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration; flags override it
        let config = load_configuration(global)?;
        let mut options = MirrorOptions::from_config(&config);
        if self.include_hidden {
            options = options.with_include_hidden(true);
        }
        if self.max_depth.is_some() {
            options = options.with_max_depth(self.max_depth);
        }

        // 2. Build the plan
        let plan = MirrorPlan::build(&mut LocalLister, &self.source, &self.destination, &options)?;

        // 3. Execute (or report) the plan
        let mut fs = StdFilesystem;
        let mut executor = MirrorExecutor::new(&mut fs)
            .with_mode(config.effective_mirror().directory_mode)
            .with_limits(options.limits);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan)?;

        // 4. Report
        if !global.quiet {
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }
        print_lines(summary(&result, global.verbose))
    }
}

/// Lines printed on stdout for a finished run.
fn summary(result: &MirrorResult, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if result.dry_run || verbose {
        lines.extend(result.actions_taken.iter().cloned());
    }
    if result.dry_run {
        lines.push("Dry run: no changes made".to_string());
    } else {
        lines.push(format!(
            "Created {} directories ({} files not transferred)",
            result.directories_created, result.files_skipped
        ));
    }
    lines
}
