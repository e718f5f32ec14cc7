//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Installed binary name; the package is `sftree-cli`.
const BIN_NAME: &str = "sftree";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            for line in install_hint(self.shell) {
                eprintln!("# {line}");
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// Instructions for enabling the generated script.
fn install_hint(shell: Shell) -> Vec<String> {
    let mut lines = vec![format!("Generating {shell} completion script")];
    match shell {
        Shell::Bash => {
            lines.push("Run the following command to enable completions:".into());
            lines.push(format!(
                "  {BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
            ));
            lines.push("Or source it directly in ~/.bashrc:".into());
            lines.push(format!("  eval \"$({BIN_NAME} completions bash)\""));
        }
        Shell::Zsh => {
            lines.push("Run the following command to enable completions:".into());
            lines.push(format!(
                "  {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}"
            ));
            lines.push("Make sure ~/.zsh/completions is in your $fpath".into());
        }
        Shell::Fish => {
            lines.push("Run the following command to enable completions:".into());
            lines.push(format!(
                "  {BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
            ));
            lines.push("Or add to config.fish:".into());
            lines.push(format!("  {BIN_NAME} completions fish | source"));
        }
        Shell::PowerShell => {
            lines.push("Run:".into());
            lines.push(format!(
                "  {BIN_NAME} completions powershell | Out-String | Invoke-Expression"
            ));
        }
        _ => {}
    }
    lines
}
