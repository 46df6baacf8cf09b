//! Property-based tests for token resolution.
//!
//! The normalize module carries its own small property suite; this one
//! exercises [`BaseDirResolver`] end to end with many more cases.

#![cfg(unix)]

use super::resolver::{BaseDirResolver, PathResolver};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Plain relative tokens always land under the base directory
    #[test]
    fn relative_tokens_stay_under_base(path in relative_path_strategy()) {
        let resolver = BaseDirResolver::new("/base");
        let resolved = resolver.resolve(&path).unwrap();
        prop_assert!(resolved.starts_with("/base"));
        prop_assert!(resolved.ends_with(&path));
    }

    // Resolving a resolved path is a no-op
    #[test]
    fn resolution_idempotent(path in relative_path_strategy()) {
        let resolver = BaseDirResolver::new("/base");
        let once = resolver.resolve(&path).unwrap();
        let twice = resolver.resolve(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Two resolvers differ only in their base for relative tokens
    #[test]
    fn base_only_affects_relative_tokens(path in relative_path_strategy()) {
        let a = BaseDirResolver::new("/a").resolve(&path).unwrap();
        let b = BaseDirResolver::new("/b").resolve(&path).unwrap();
        prop_assert_eq!(a.strip_prefix("/a").unwrap(), b.strip_prefix("/b").unwrap());

        let absolute = Path::new("/abs").join(&path);
        prop_assert_eq!(
            BaseDirResolver::new("/a").resolve(&absolute).unwrap(),
            BaseDirResolver::new("/b").resolve(&absolute).unwrap()
        );
    }
}
