//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, MirrorConfig};
use super::validator::ConfigValidator;
use crate::path::PathLimits;
use proptest::prelude::*;

fn limits_strategy() -> impl Strategy<Value = PathLimits> {
    (0usize..=5000, 0usize..=300).prop_map(|(max_path_len, max_name_len)| PathLimits {
        max_path_len,
        max_name_len,
    })
}

fn mirror_strategy() -> impl Strategy<Value = MirrorConfig> {
    (any::<bool>(), 0u32..=0o17777, prop::option::of(0usize..10)).prop_map(
        |(include_hidden, directory_mode, max_depth)| MirrorConfig {
            include_hidden,
            directory_mode,
            max_depth,
        },
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(limits_strategy()),
        prop::option::of(mirror_strategy()),
    )
        .prop_map(|(limits, mirror)| Config { limits, mirror })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // A section present in the higher source always wins
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.limits, high.limits.or(low.limits));
        prop_assert_eq!(merged.mirror, high.mirror.or(low.mirror));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // The validator accepts exactly the limits that can be enforced
    #[test]
    fn validator_matches_limit_rules(limits in limits_strategy()) {
        let config = Config { limits: Some(limits), mirror: None };
        let expected = limits.max_path_len > 0
            && limits.max_name_len > 0
            && limits.max_path_len <= 4096
            && limits.max_name_len <= 255
            && limits.max_name_len <= limits.max_path_len;
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), expected);
    }

    // Modes are accepted up to and including 0o7777
    #[test]
    fn validator_matches_mode_rule(mirror in mirror_strategy()) {
        let mode = mirror.directory_mode;
        let config = Config { limits: None, mirror: Some(mirror) };
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), mode <= 0o7777);
    }
}
