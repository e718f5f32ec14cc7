//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::mirror::DEFAULT_DIRECTORY_MODE;
use crate::path::PathLimits;

/// Complete configuration structure.
///
/// Every section is optional so that partial files can be layered on top
/// of each other.
///
/// # Examples
///
/// ```
/// use sftree::config::{Config, MirrorConfig};
///
/// let config: Config = serde_yaml::from_str(
///     "limits:\n  max_name_len: 64\nmirror:\n  include_hidden: true\n",
/// )
/// .unwrap();
///
/// assert_eq!(config.limits.unwrap().max_name_len, 64);
/// assert_eq!(config.limits.unwrap().max_path_len, 4096);
/// assert!(config.mirror.unwrap().include_hidden);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path and name length limits.
    pub limits: Option<PathLimits>,

    /// Tree mirroring settings.
    pub mirror: Option<MirrorConfig>,
}

impl Config {
    /// Limits with defaults filled in.
    #[must_use]
    pub fn effective_limits(&self) -> PathLimits {
        self.limits.unwrap_or_default()
    }

    /// Mirror settings with defaults filled in.
    #[must_use]
    pub fn effective_mirror(&self) -> MirrorConfig {
        self.mirror.clone().unwrap_or_default()
    }
}

/// Settings for `mirror`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MirrorConfig {
    /// Walk into hidden entries.
    pub include_hidden: bool,

    /// Permission bits for created directories.
    pub directory_mode: u32,

    /// Number of levels below the root to read; unbounded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            directory_mode: DEFAULT_DIRECTORY_MODE,
            max_depth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.effective_limits(), PathLimits::default());
        assert_eq!(config.effective_mirror().directory_mode, 0o755);
    }

    #[test]
    fn test_octal_mode() {
        let config: Config = serde_yaml::from_str("mirror:\n  directory_mode: 0o700\n").unwrap();
        assert_eq!(config.effective_mirror().directory_mode, 0o700);
        assert!(!config.effective_mirror().include_hidden);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_yaml::from_str::<Config>("ports: 5\n").is_err());
        assert!(serde_yaml::from_str::<Config>("mirror:\n  recursive: true\n").is_err());
    }

    #[test]
    fn test_serialize_skips_unset_depth() {
        let yaml = serde_yaml::to_string(&MirrorConfig::default()).unwrap();
        assert!(!yaml.contains("max_depth"));
        assert!(yaml.contains("directory_mode: 493"));
    }
}
