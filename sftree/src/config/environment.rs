//! Environment variable handling for configuration overrides.
//!
//! Each `SFTREE_*` variable overrides a single field, taking precedence
//! over configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

/// Overrides `limits.max_path_len`.
pub const MAX_PATH_LEN_ENV: &str = "SFTREE_MAX_PATH_LEN";
/// Overrides `limits.max_name_len`.
pub const MAX_NAME_LEN_ENV: &str = "SFTREE_MAX_NAME_LEN";
/// Overrides `mirror.include_hidden`.
pub const INCLUDE_HIDDEN_ENV: &str = "SFTREE_INCLUDE_HIDDEN";
/// Overrides `mirror.directory_mode`, read as octal.
pub const DIRECTORY_MODE_ENV: &str = "SFTREE_DIRECTORY_MODE";
/// Overrides `mirror.max_depth`.
pub const MAX_DEPTH_ENV: &str = "SFTREE_MAX_DEPTH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use sftree::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply every `SFTREE_*` override present in the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_limit_overrides(config)?;
        Self::apply_mirror_overrides(config)
    }

    fn apply_limit_overrides(config: &mut Config) -> Result<()> {
        let mut limits = config.effective_limits();
        let mut modified = false;

        if let Ok(value) = env::var(MAX_PATH_LEN_ENV) {
            limits.max_path_len = Self::parse_number(MAX_PATH_LEN_ENV, &value)?;
            modified = true;
        }

        if let Ok(value) = env::var(MAX_NAME_LEN_ENV) {
            limits.max_name_len = Self::parse_number(MAX_NAME_LEN_ENV, &value)?;
            modified = true;
        }

        if modified {
            config.limits = Some(limits);
        }
        Ok(())
    }

    fn apply_mirror_overrides(config: &mut Config) -> Result<()> {
        let mut mirror = config.effective_mirror();
        let mut modified = false;

        if let Ok(value) = env::var(INCLUDE_HIDDEN_ENV) {
            mirror.include_hidden = Self::parse_bool(INCLUDE_HIDDEN_ENV, &value)?;
            modified = true;
        }

        if let Ok(value) = env::var(DIRECTORY_MODE_ENV) {
            mirror.directory_mode = Self::parse_mode(DIRECTORY_MODE_ENV, &value)?;
            modified = true;
        }

        if let Ok(value) = env::var(MAX_DEPTH_ENV) {
            mirror.max_depth = Some(Self::parse_number(MAX_DEPTH_ENV, &value)?);
            modified = true;
        }

        if modified {
            config.mirror = Some(mirror);
        }
        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid boolean value: {s}"),
            }),
        }
    }

    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got {s}"),
        })
    }

    /// Accepts `755`, `0755` and `0o755`.
    fn parse_mode(field: &str, s: &str) -> Result<u32> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
        u32::from_str_radix(digits, 8).map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be an octal mode, got {s}"),
        })
    }
}
