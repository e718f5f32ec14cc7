//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on split/join round trips and re-rooting.

use super::classify::{is_dotted, is_hidden};
use super::segments::{join, replace_grandparent, split};
use super::SEPARATOR;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn clean_path_strategy() -> impl Strategy<Value = (bool, Vec<String>)> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 1..8))
}

fn render(absolute: bool, segments: &[String], runs: &[usize]) -> String {
    let mut path = String::new();
    if absolute {
        path.push(SEPARATOR);
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            let run = runs.get(i).copied().unwrap_or(1).max(1);
            path.extend(std::iter::repeat(SEPARATOR).take(run));
        }
        path.push_str(segment);
    }
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // join(split(p)) collapses redundant separators and keeps rootedness
    #[test]
    fn split_join_collapses(
        (absolute, segments) in clean_path_strategy(),
        runs in prop::collection::vec(1usize..4, 8),
        trailing in 0usize..3,
    ) {
        let canonical = render(absolute, &segments, &[]);
        let mut messy = render(absolute, &segments, &runs);
        messy.extend(std::iter::repeat(SEPARATOR).take(trailing));

        let rejoined = join(split(&messy).unwrap()).unwrap();
        prop_assert_eq!(rejoined, canonical);
    }

    // A "./" prefix disappears through split and join
    #[test]
    fn split_join_drops_current_dir((_, segments) in clean_path_strategy()) {
        let relative = render(false, &segments, &[]);
        let prefixed = format!(".{SEPARATOR}{relative}");
        prop_assert_eq!(join(split(&prefixed).unwrap()).unwrap(), relative);
    }

    // A leading current-dir part never makes a joined path absolute
    #[test]
    fn current_dir_first_part_stays_relative(
        dot_slashes in 1usize..4,
        (_, segments) in clean_path_strategy(),
    ) {
        let first = format!(".{}", SEPARATOR.to_string().repeat(dot_slashes));
        let mut parts = vec![first];
        parts.extend(segments.iter().cloned());
        let joined = join(&parts).unwrap();
        prop_assert!(!joined.starts_with(SEPARATOR));
        prop_assert_eq!(joined, render(false, &segments, &[]));
    }

    // split yields exactly one more segment than there are separators
    #[test]
    fn split_segment_count(s in "[a-z/]{0,40}") {
        let separators = s.chars().filter(|&c| c == SEPARATOR).count();
        prop_assert_eq!(split(&s).unwrap().len(), separators + 1);
    }

    // Joining clean segments never produces doubled separators
    #[test]
    fn join_has_no_doubled_separators(parts in prop::collection::vec("/{0,3}[a-z.]{0,6}/{0,3}", 0..6)) {
        let joined = join(&parts).unwrap();
        let doubled = format!("{SEPARATOR}{SEPARATOR}");
        prop_assert!(!joined.contains(&doubled));
    }

    // Re-rooting keeps everything below the top-level segment
    #[test]
    fn replace_grandparent_keeps_tail(
        (absolute, segments) in clean_path_strategy(),
        root in segment_strategy(),
    ) {
        let path = render(absolute, &segments, &[]);
        let replaced = replace_grandparent(&path, &root).unwrap();

        if segments.len() > 1 {
            let tail = render(false, &segments[1..], &[]);
            prop_assert_eq!(replaced.into_owned(), format!("{root}{SEPARATOR}{tail}"));
        } else {
            prop_assert_eq!(replaced.into_owned(), path);
        }
    }

    // Hidden-ness is decided by the first byte only
    #[test]
    fn hidden_and_dotted_consistent(s in "[a-z.]{0,4}") {
        if is_dotted(&s) {
            prop_assert!(is_hidden(&s));
        }
        prop_assert_eq!(is_hidden(&s), s.starts_with('.'));
    }
}
