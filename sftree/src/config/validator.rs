//! Configuration validation.

use crate::config::schema::{Config, MirrorConfig};
use crate::error::{Error, Result};
use crate::path::segments::{DEFAULT_MAX_NAME_LEN, DEFAULT_MAX_PATH_LEN};
use crate::path::PathLimits;

/// Highest permission bits accepted for created directories.
pub const MAX_DIRECTORY_MODE: u32 = 0o7777;

/// Validates a resolved configuration.
///
/// Limits may only be tightened: entries copied into lists are rebuilt with
/// the default limits, so a configured limit above the default would accept
/// paths that cannot be stored.
///
/// # Examples
///
/// ```
/// use sftree::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref limits) = config.limits {
            Self::validate_limits(limits)?;
        }

        if let Some(ref mirror) = config.mirror {
            Self::validate_mirror(mirror)?;
        }

        Ok(())
    }

    fn validate_limits(limits: &PathLimits) -> Result<()> {
        Self::validate_limit("limits.max_path_len", limits.max_path_len, DEFAULT_MAX_PATH_LEN)?;
        Self::validate_limit("limits.max_name_len", limits.max_name_len, DEFAULT_MAX_NAME_LEN)?;

        if limits.max_name_len > limits.max_path_len {
            return Err(Error::Validation {
                field: "limits.max_name_len".into(),
                message: format!(
                    "Name limit {} exceeds path limit {}",
                    limits.max_name_len, limits.max_path_len
                ),
            });
        }
        Ok(())
    }

    fn validate_limit(field: &str, value: usize, ceiling: usize) -> Result<()> {
        if value == 0 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Limit must be greater than 0".into(),
            });
        }
        if value > ceiling {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Limit {value} exceeds the maximum of {ceiling}"),
            });
        }
        Ok(())
    }

    fn validate_mirror(mirror: &MirrorConfig) -> Result<()> {
        if mirror.directory_mode > MAX_DIRECTORY_MODE {
            return Err(Error::Validation {
                field: "mirror.directory_mode".into(),
                message: format!("Mode {:o} is not a valid permission mode", mirror.directory_mode),
            });
        }
        Ok(())
    }
}
