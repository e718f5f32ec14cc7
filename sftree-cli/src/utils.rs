//! Utility functions for CLI operations.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use sftree::{Config, ConfigBuilder};
use std::io::Write;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file layered above discovered ones.
    pub config: Option<PathBuf>,
}

/// Output format for commands that print structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. Discovered configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "File not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    let config = builder.build().map_err(|e| CliError::Config(e.to_string()))?;
    log::debug!("Effective limits: {:?}", config.effective_limits());
    Ok(config)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Print lines on stdout.
pub fn print_lines<I, S>(lines: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for line in lines {
        writeln!(handle, "{}", line.as_ref())?;
    }
    Ok(())
}
