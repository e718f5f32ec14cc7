//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, JoinCommand, LsCommand, MirrorCommand, RerootCommand, SplitCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting and mirroring directory trees.
#[derive(Parser)]
#[command(name = "sftree")]
#[command(version, about = "Inspect and mirror directory trees", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file in addition to discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "SFTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the files and directories in a directory
    Ls(LsCommand),

    /// Split a path into its segments
    Split(SplitCommand),

    /// Join path segments into one clean path
    Join(JoinCommand),

    /// Replace the top-level segment of a path
    Reroot(RerootCommand),

    /// Recreate a directory tree's skeleton somewhere else
    Mirror(MirrorCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
