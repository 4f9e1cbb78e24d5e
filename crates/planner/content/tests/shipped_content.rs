//! Checks over the data files shipped with the crate.

use planner_content::load_embedded;
use planner_core::{
    CatalogOracle, Playstyle, PolicyOracle, Priority, RollProfile, Stat, StatBlock,
    recommend_spells, recommend_weapons,
};

#[test]
fn every_playstyle_and_priority_resolves() {
    let store = load_embedded().unwrap();

    for playstyle in Playstyle::all() {
        for priority in Priority::all() {
            let profile = store
                .requirement_profile(playstyle, priority)
                .unwrap_or_else(|| panic!("no profile for {playstyle}/{priority}"));
            assert!(profile.weights.has_positive_weight());
        }
    }
}

#[test]
fn class_stat_totals_match_starting_levels() {
    let store = load_embedded().unwrap();

    assert_eq!(store.classes.len(), 8);
    for class in &store.classes {
        assert_eq!(
            class.stats.sum(),
            store.config.target_stat_sum(class.starting_level),
            "class {}",
            class.key
        );
    }
}

#[test]
fn deprived_stays_put_at_level_one() {
    let store = load_embedded().unwrap();
    let deprived = store.starting_class("deprived").unwrap();

    let result = store
        .allocator()
        .distribute_stats(&deprived.stats, 1, Playstyle::Knight, Priority::Damage)
        .unwrap();

    // Knight minimums still apply even though no points are available.
    assert_eq!(result.vigor, 10);
    assert_eq!(result.strength, 10);
    assert!(result.dominates(&deprived.stats));
}

#[test]
fn base_damage_profile_spends_first_point_on_vigor() {
    let store = load_embedded().unwrap();
    let profile = store.policy.base_profile(Priority::Damage).unwrap();

    let result = planner_core::allocate(
        &StatBlock::uniform(6),
        2,
        &profile,
        &store.caps,
        &store.config,
    )
    .unwrap();

    let mut expected = StatBlock::uniform(6);
    expected.vigor = 7;
    assert_eq!(result, expected);
}

#[test]
fn allocation_is_monotone_in_level() {
    let store = load_embedded().unwrap();
    let allocator = store.allocator();

    for class in &store.classes {
        for playstyle in Playstyle::all() {
            for priority in Priority::all() {
                let start = class.starting_level;
                let mut previous = allocator
                    .distribute_stats(&class.stats, start, playstyle, priority)
                    .unwrap();

                for level in start + 1..=start + 120 {
                    let current = allocator
                        .distribute_stats(&class.stats, level, playstyle, priority)
                        .unwrap();
                    assert!(
                        current.dominates(&previous),
                        "{} {}/{} dropped a stat at level {}",
                        class.key,
                        playstyle,
                        priority,
                        level
                    );
                    previous = current;
                }
            }
        }
    }
}

#[test]
fn high_level_mage_gets_sorceries_and_a_good_roll() {
    let store = load_embedded().unwrap();
    let sorcerer = store.starting_class("sorcerer").unwrap();

    let result = store
        .allocator()
        .distribute_stats(&sorcerer.stats, 150, Playstyle::Mage, Priority::Evasion)
        .unwrap();

    assert_eq!(result.sum(), 203);
    assert!(result.get(Stat::Intelligence) >= 40);

    let spells = recommend_spells(&store, &result, Playstyle::Mage);
    assert_eq!(spells.len(), 1);
    assert_eq!(spells[0].item.name, "Test Spell");
    assert!(spells[0].meets_requirements);

    assert_eq!(recommend_weapons(&store, &result).len(), 3);
    assert!(RollProfile::from_stats(&result).is_good_roll());
}
