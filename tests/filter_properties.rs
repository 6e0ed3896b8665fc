//! Property tests for the filter engine

use codequill::ignore::{collect_patterns, filter_files, normalize, normalize_all};
use codequill::{NormalizedPattern, TrackedFile};
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c.]{1,4}", 1..4).prop_map(|segments| segments.join("/"))
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]{1,3}/",
        "\\*\\.[a-c]{1,2}",
        "[a-c]{1,2}/[a-c*]{1,3}",
        "[a-c.]{1,3}",
    ]
}

fn tracked(paths: &[String]) -> Vec<TrackedFile> {
    paths.iter().map(|p| TrackedFile::new(p.clone())).collect()
}

fn normalized(raw: &[String]) -> Vec<NormalizedPattern> {
    raw.iter().map(|p| normalize(p)).collect()
}

proptest! {
    #[test]
    fn included_plus_excluded_is_tracked(
        paths in prop::collection::vec(path_strategy(), 0..20),
        raw in prop::collection::vec(pattern_strategy(), 0..5),
    ) {
        let files = tracked(&paths);
        let result = filter_files(&files, &normalized(&raw));
        prop_assert_eq!(result.included.len() + result.excluded_count(), files.len());
    }

    #[test]
    fn filtering_is_idempotent(
        paths in prop::collection::vec(path_strategy(), 0..20),
        raw in prop::collection::vec(pattern_strategy(), 0..5),
    ) {
        let patterns = normalized(&raw);
        let first = filter_files(&tracked(&paths), &patterns);
        let second = filter_files(&first.included, &patterns);
        prop_assert_eq!(second.excluded_count(), 0);
        prop_assert_eq!(&first.included, &second.included);
    }

    #[test]
    fn included_keeps_tracked_order(
        paths in prop::collection::vec(path_strategy(), 0..20),
        raw in prop::collection::vec(pattern_strategy(), 0..5),
    ) {
        let files = tracked(&paths);
        let result = filter_files(&files, &normalized(&raw));
        let mut cursor = files.iter();
        for kept in &result.included {
            prop_assert!(cursor.any(|f| f == kept));
        }
    }

    #[test]
    fn pattern_order_never_changes_the_decision(
        paths in prop::collection::vec(path_strategy(), 0..20),
        raw in prop::collection::vec(pattern_strategy(), 0..5),
    ) {
        let files = tracked(&paths);
        let mut reversed = raw.clone();
        reversed.reverse();
        let forward = filter_files(&files, &normalized(&raw));
        let backward = filter_files(&files, &normalized(&reversed));
        prop_assert_eq!(forward.included, backward.included);
    }

    #[test]
    fn normalize_is_pure(raw in "\\PC{0,12}") {
        prop_assert_eq!(normalize(&raw), normalize(&raw));
    }
}

#[test]
fn aggregated_patterns_normalize_in_order() {
    let raw = collect_patterns(Some("# c\n\n*.log\n*.lock\n"), "README.md,server/");
    let globs: Vec<String> = normalize_all(&raw)
        .iter()
        .map(|p| p.as_str().to_string())
        .collect();
    assert_eq!(globs, vec!["**/*.log", "**/*.lock", "**/README.md", "server/**"]);
}
