//! Loading content from a data directory on disk.

use std::fs;
use std::path::Path;

use planner_content::ContentFactory;
use planner_core::{Playstyle, Priority, Stat, StatCapPair};
use tempfile::TempDir;

const SHIPPED: [&str; 6] = [
    "config.toml",
    "stat_caps.ron",
    "policy.ron",
    "classes.ron",
    "weapons.ron",
    "spells.ron",
];

fn copy_shipped_data(dir: &Path) {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    for name in SHIPPED {
        fs::copy(source.join(name), dir.join(name)).unwrap();
    }
}

#[test]
fn loads_a_copy_of_the_shipped_data() {
    let dir = TempDir::new().unwrap();
    copy_shipped_data(dir.path());

    let store = ContentFactory::new(dir.path()).build().unwrap();

    assert_eq!(store.config.max_level, 838);
    assert_eq!(store.caps.get(Stat::Adaptability), StatCapPair::new(20, 39));
    assert_eq!(store.weapons.len(), 3);
    assert!(store.policy.profile(Playstyle::Hexer, Priority::Versatility).is_some());
}

#[test]
fn overridden_config_changes_the_budget() {
    let dir = TempDir::new().unwrap();
    copy_shipped_data(dir.path());
    fs::write(
        dir.path().join("config.toml"),
        "base_stat_total = 60\nmax_level = 500\n",
    )
    .unwrap();

    let store = ContentFactory::new(dir.path()).build().unwrap();

    assert_eq!(store.config.target_stat_sum(10), 70);
    assert_eq!(store.config.max_level, 500);
}

#[test]
fn missing_file_error_names_the_path() {
    let dir = TempDir::new().unwrap();
    copy_shipped_data(dir.path());
    fs::remove_file(dir.path().join("spells.ron")).unwrap();

    let err = ContentFactory::new(dir.path()).build().unwrap_err();

    assert!(err.to_string().contains("spells.ron"));
}

#[test]
fn policy_without_a_playstyle_fails_at_allocation() {
    let dir = TempDir::new().unwrap();
    copy_shipped_data(dir.path());
    fs::write(
        dir.path().join("policy.ron"),
        r#"PolicySpec(
            base_weights: [(Vigor, 0.8)],
            priorities: [(priority: Damage, adjustments: [])],
            playstyles: [],
        )"#,
    )
    .unwrap();

    let store = ContentFactory::new(dir.path()).build().unwrap();
    let err = store
        .allocator()
        .distribute_stats(
            &store.classes[0].stats,
            20,
            Playstyle::Barbarian,
            Priority::Damage,
        )
        .unwrap_err();

    assert!(err.to_string().contains("barbarian"));
}
