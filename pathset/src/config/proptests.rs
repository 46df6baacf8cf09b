//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use proptest::prelude::*;
use std::path::PathBuf;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,8}(/[a-z]{1,8}){0,2}"),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::vec("\\.[a-z]{1,6}", 1..4)),
        prop::option::of("[a-z ]{1,20}"),
    )
        .prop_map(
            |(base_dir, expand_tilde, allow_file_uris, script_extensions, display_name)| Config {
                base_dir: base_dir.map(PathBuf::from),
                expand_tilde,
                allow_file_uris,
                script_extensions,
                display_name,
            },
        )
}

proptest! {
    // Set fields of the higher layer always win
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let merged = ConfigMerger::merge([&low, &high]);

        prop_assert_eq!(merged.base_dir, high.base_dir.or(low.base_dir));
        prop_assert_eq!(merged.expand_tilde, high.expand_tilde.or(low.expand_tilde));
        prop_assert_eq!(merged.allow_file_uris, high.allow_file_uris.or(low.allow_file_uris));
        prop_assert_eq!(merged.script_extensions, high.script_extensions.or(low.script_extensions));
        prop_assert_eq!(merged.display_name, high.display_name.or(low.display_name));
    }

    // Merging a config into an empty one reproduces it
    #[test]
    fn merge_into_default_is_identity(config in config_strategy()) {
        let merged = ConfigMerger::merge([&config]);
        prop_assert_eq!(merged, config);
    }

    // Merging the same layer twice changes nothing
    #[test]
    fn merge_is_idempotent(base in config_strategy(), layer in config_strategy()) {
        let once = ConfigMerger::merge([&base, &layer]);
        let twice = ConfigMerger::merge([&base, &layer, &layer]);
        prop_assert_eq!(once, twice);
    }
}
