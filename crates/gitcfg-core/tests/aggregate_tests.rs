//! Tests for level-partitioned aggregation

use gitcfg_core::{ConfigEntry, ConfigLevel, Error, LeveledConfig, aggregate, count_by_level};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn entry(name: &str, value: &str, level: &'static str) -> ConfigEntry<&'static str> {
    ConfigEntry::new(name, value, level)
}

fn pairs(config: &LeveledConfig, level: ConfigLevel) -> Vec<(String, String)> {
    config
        .get(level)
        .map(|entries| {
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_same_key_at_two_levels_is_kept_per_level() {
    let entries = vec![
        entry("user.name", "Alice", "local"),
        entry("user.name", "Bob", "global"),
        entry("core.bare", "false", "local"),
    ];

    let config = LeveledConfig::from_entries(&entries).unwrap();

    assert_eq!(
        config.levels().collect::<Vec<_>>(),
        vec![ConfigLevel::Global, ConfigLevel::Local]
    );
    assert_eq!(
        pairs(&config, ConfigLevel::Local),
        vec![
            ("user.name".to_string(), "Alice".to_string()),
            ("core.bare".to_string(), "false".to_string()),
        ]
    );
    assert_eq!(
        pairs(&config, ConfigLevel::Global),
        vec![("user.name".to_string(), "Bob".to_string())]
    );
}

#[test]
fn test_duplicate_keys_within_level_are_not_collapsed() {
    let entries = vec![
        entry("include.path", "a.inc", "global"),
        entry("include.path", "b.inc", "global"),
        entry("include.path", "c.inc", "global"),
    ];

    let config = LeveledConfig::from_entries(&entries).unwrap();
    let global = config.get(ConfigLevel::Global).unwrap();

    assert_eq!(global.len(), 3);
    assert_eq!(
        global.keys().collect::<Vec<_>>(),
        vec!["include.path", "include.path", "include.path"]
    );
}

#[rstest]
#[case::programdata("programdata", ConfigLevel::ProgramData)]
#[case::system("system", ConfigLevel::System)]
#[case::xdg("xdg", ConfigLevel::Xdg)]
#[case::global("global", ConfigLevel::Global)]
#[case::local("local", ConfigLevel::Local)]
#[case::app("app", ConfigLevel::App)]
#[case::highest("highest", ConfigLevel::Highest)]
fn test_single_entry_lands_in_its_level(#[case] name: &'static str, #[case] level: ConfigLevel) {
    let entries = vec![entry("a.b", "1", name)];

    let config = LeveledConfig::from_entries(&entries).unwrap();

    assert_eq!(config.len(), 1);
    assert_eq!(config.get(level).unwrap().get("a.b"), Some("1"));
}

#[test]
fn test_unrecognized_level_aborts_without_result() {
    let entries = vec![
        entry("user.name", "Alice", "local"),
        entry("extensions.worktreeconfig", "true", "worktree"),
    ];

    let err = LeveledConfig::from_entries(&entries).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedLevel { .. }));
}

#[test]
fn test_json_shape() {
    let entries = vec![
        entry("user.name", "Alice", "local"),
        entry("user.name", "Bob", "global"),
        entry("core.bare", "false", "local"),
    ];

    let config = LeveledConfig::from_entries(&entries).unwrap();
    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(
        json,
        r#"{"global":{"user.name":"Bob"},"local":{"user.name":"Alice","core.bare":"false"}}"#
    );
}

#[test]
fn test_json_keeps_repeated_keys() {
    let entries = vec![
        entry("remote.origin.fetch", "x", "local"),
        entry("remote.origin.fetch", "y", "local"),
    ];

    let config = LeveledConfig::from_entries(&entries).unwrap();
    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(
        json,
        r#"{"local":{"remote.origin.fetch":"x","remote.origin.fetch":"y"}}"#
    );
}

fn arb_entries() -> impl Strategy<Value = Vec<ConfigEntry<&'static str>>> {
    prop::collection::vec(
        (0usize..ConfigLevel::COUNT, "[a-z]{1,4}\\.[a-z]{1,4}", "[a-z0-9]{0,3}"),
        0..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(level, key, value)| ConfigEntry::new(key, value, ConfigLevel::ALL[level].name()))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_exactly_populated_levels_in_canonical_order(entries in arb_entries()) {
        let counts = count_by_level(&entries).unwrap();
        let config = aggregate(&entries, &counts).unwrap();

        let expected: Vec<ConfigLevel> = ConfigLevel::ALL
            .into_iter()
            .filter(|level| entries.iter().any(|e| e.level == level.name()))
            .collect();
        prop_assert_eq!(config.levels().collect::<Vec<_>>(), expected);

        for (level, bucket) in config.iter() {
            prop_assert!(!bucket.is_empty());
            prop_assert_eq!(bucket.len(), counts.get(level));
        }
    }

    #[test]
    fn test_order_within_level_is_stable(entries in arb_entries()) {
        let config = LeveledConfig::from_entries(&entries).unwrap();

        for (level, bucket) in config.iter() {
            let expected: Vec<(&str, &str)> = entries
                .iter()
                .filter(|e| e.level == level.name())
                .map(|e| (e.name.as_str(), e.value.as_str()))
                .collect();
            prop_assert_eq!(bucket.iter().collect::<Vec<_>>(), expected);
        }
    }
}
