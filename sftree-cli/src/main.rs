//! Main entry point for the sftree CLI.
//!
//! It provides commands for working with mirrored trees:
//! - `ls`: List a directory
//! - `split` / `join` / `reroot`: Path manipulation
//! - `mirror`: Recreate a tree's directory skeleton
//! - `validate`: Check a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = sftree::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not initialize logging: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Reroot(cmd) => cmd.execute(&global),
        cli::Command::Mirror(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
