//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use sftree::config::{Config, ConfigMerger, MirrorConfig};
///
/// let low = Config {
///     mirror: Some(MirrorConfig { include_hidden: false, ..Default::default() }),
///     ..Default::default()
/// };
/// let high = Config {
///     mirror: Some(MirrorConfig { include_hidden: true, ..Default::default() }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert!(result.effective_mirror().include_hidden);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; sections present in `source` replace
    /// the target's section as a whole.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.limits.is_some() {
            target.limits = source.limits;
        }

        if source.mirror.is_some() {
            target.mirror.clone_from(&source.mirror);
        }
    }
}
