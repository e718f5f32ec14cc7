//! Build script for sftree-cli.
//!
//! Generates the `sftree.1` man page in OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described again here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("sftree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and mirror directory trees")
        .long_about(
            "Command-line tool for listing directories, manipulating slash-separated paths \
             and recreating the directory skeleton of a tree somewhere else",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file in addition to discovered ones")
                .value_name("PATH")
                .global(true)
                .env("SFTREE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("ls")
                .about("List the files and directories in a directory")
                .long_about("Print the entries of a directory, skipping hidden ones unless --all"),
            Command::new("split")
                .about("Split a path into its segments")
                .long_about("Print one segment per line; every separator ends a segment"),
            Command::new("join")
                .about("Join path segments into one clean path")
                .long_about("Clean each segment and join the non-empty ones with '/'"),
            Command::new("reroot")
                .about("Replace the top-level segment of a path")
                .long_about("Replace the first segment of PATH with ROOT"),
            Command::new("mirror")
                .about("Recreate a directory tree's skeleton somewhere else")
                .long_about(
                    "Walk SOURCE breadth-first and create every directory under DEST; \
                     files are listed but not transferred",
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check an sftree configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("sftree.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
