//! Starting classes, weapons and spells, plus requirement checks against a
//! finished stat block.

use crate::env::CatalogOracle;
use crate::policy::Playstyle;
use crate::stats::StatBlock;

/// A class a character can start as.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingClass {
    /// Lookup key (`"deprived"`, `"warrior"`, ...).
    pub key: String,
    /// Display name.
    pub name: String,
    pub starting_level: u32,
    pub stats: StatBlock,
}

impl StartingClass {
    /// Levels a caller may request for this class, inclusive.
    pub fn level_range(&self, max_level: u32) -> core::ops::RangeInclusive<u32> {
        self.starting_level..=max_level
    }
}

/// Stat requirements to wield a weapon effectively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRequirements {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub faith: u32,
}

impl WeaponRequirements {
    pub fn is_met_by(&self, stats: &StatBlock) -> bool {
        stats.strength >= self.strength
            && stats.dexterity >= self.dexterity
            && stats.intelligence >= self.intelligence
            && stats.faith >= self.faith
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    /// Weapon class, e.g. "Straight Sword".
    pub weapon_type: String,
    /// Scaling letters as shown in game, e.g. "C STR, C DEX".
    pub scaling: String,
    pub requirements: WeaponRequirements,
}

/// Stat requirements to cast a spell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellRequirements {
    pub intelligence: u32,
    pub faith: u32,
}

impl SpellRequirements {
    pub fn is_met_by(&self, stats: &StatBlock) -> bool {
        stats.intelligence >= self.intelligence && stats.faith >= self.faith
    }
}

/// School of magic a spell belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellSchool {
    Sorcery,
    Miracle,
    Hex,
}

impl SpellSchool {
    /// School a playstyle draws its spells from, if it casts at all.
    pub const fn for_playstyle(playstyle: Playstyle) -> Option<SpellSchool> {
        match playstyle {
            Playstyle::Mage | Playstyle::MagicSwordsman | Playstyle::MageBarbarian => {
                Some(SpellSchool::Sorcery)
            }
            Playstyle::Priest | Playstyle::Paladin | Playstyle::FaithDex => {
                Some(SpellSchool::Miracle)
            }
            Playstyle::Hexer | Playstyle::HexerPhysical => Some(SpellSchool::Hex),
            Playstyle::Barbarian
            | Playstyle::Swordsman
            | Playstyle::Knight
            | Playstyle::Defender
            | Playstyle::Pyromancer
            | Playstyle::PyroPhysical => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub name: String,
    pub school: SpellSchool,
    /// Spell role, e.g. "Attack" or "Healing".
    pub spell_type: String,
    pub requirements: SpellRequirements,
}

/// A catalog entry annotated with whether a stat block can use it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendation<'a, T> {
    pub item: &'a T,
    pub meets_requirements: bool,
}

/// Annotates every weapon in the catalog against `stats`.
pub fn recommend_weapons<'a, C>(catalog: &'a C, stats: &StatBlock) -> Vec<Recommendation<'a, Weapon>>
where
    C: CatalogOracle + ?Sized,
{
    catalog
        .weapons()
        .iter()
        .map(|weapon| Recommendation {
            item: weapon,
            meets_requirements: weapon.requirements.is_met_by(stats),
        })
        .collect()
}

/// Annotates the spells of the playstyle's school against `stats`.
///
/// Playstyles that do not cast get an empty list.
pub fn recommend_spells<'a, C>(
    catalog: &'a C,
    stats: &StatBlock,
    playstyle: Playstyle,
) -> Vec<Recommendation<'a, Spell>>
where
    C: CatalogOracle + ?Sized,
{
    let Some(school) = SpellSchool::for_playstyle(playstyle) else {
        return Vec::new();
    };

    catalog
        .spells(school)
        .into_iter()
        .map(|spell| Recommendation {
            item: spell,
            meets_requirements: spell.requirements.is_met_by(stats),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCatalog {
        weapons: Vec<Weapon>,
        spells: Vec<Spell>,
    }

    impl CatalogOracle for FixedCatalog {
        fn starting_classes(&self) -> &[StartingClass] {
            &[]
        }

        fn weapons(&self) -> &[Weapon] {
            &self.weapons
        }

        fn spells(&self, school: SpellSchool) -> Vec<&Spell> {
            self.spells.iter().filter(|s| s.school == school).collect()
        }
    }

    fn catalog() -> FixedCatalog {
        FixedCatalog {
            weapons: vec![
                Weapon {
                    name: "Basic Dagger".into(),
                    weapon_type: "Dagger".into(),
                    scaling: "D DEX".into(),
                    requirements: WeaponRequirements {
                        strength: 5,
                        dexterity: 8,
                        ..Default::default()
                    },
                },
                Weapon {
                    name: "Basic Axe".into(),
                    weapon_type: "Axe".into(),
                    scaling: "B STR".into(),
                    requirements: WeaponRequirements {
                        strength: 12,
                        dexterity: 6,
                        ..Default::default()
                    },
                },
            ],
            spells: vec![
                Spell {
                    name: "Heal".into(),
                    school: SpellSchool::Miracle,
                    spell_type: "Healing".into(),
                    requirements: SpellRequirements {
                        intelligence: 0,
                        faith: 12,
                    },
                },
                Spell {
                    name: "Dark Orb".into(),
                    school: SpellSchool::Hex,
                    spell_type: "Attack".into(),
                    requirements: SpellRequirements {
                        intelligence: 12,
                        faith: 10,
                    },
                },
            ],
        }
    }

    #[test]
    fn weapon_requirements_need_every_stat() {
        let reqs = WeaponRequirements {
            strength: 10,
            dexterity: 10,
            intelligence: 0,
            faith: 0,
        };
        let mut stats = StatBlock::uniform(10);
        assert!(reqs.is_met_by(&stats));

        stats.dexterity = 9;
        assert!(!reqs.is_met_by(&stats));
    }

    #[test]
    fn spell_requirements_check_intelligence_and_faith() {
        let reqs = SpellRequirements {
            intelligence: 12,
            faith: 10,
        };
        let mut stats = StatBlock::uniform(6);
        stats.intelligence = 12;
        assert!(!reqs.is_met_by(&stats));

        stats.faith = 10;
        assert!(reqs.is_met_by(&stats));
    }

    #[test]
    fn weapons_are_annotated_in_catalog_order() {
        let catalog = catalog();
        let mut stats = StatBlock::uniform(6);
        stats.dexterity = 8;

        let recs = recommend_weapons(&catalog, &stats);

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].item.name, "Basic Dagger");
        assert!(recs[0].meets_requirements);
        assert!(!recs[1].meets_requirements);
    }

    #[test]
    fn spells_follow_playstyle_school() {
        let catalog = catalog();
        let stats = StatBlock::uniform(12);

        let hexes = recommend_spells(&catalog, &stats, Playstyle::HexerPhysical);
        assert_eq!(hexes.len(), 1);
        assert_eq!(hexes[0].item.name, "Dark Orb");
        assert!(hexes[0].meets_requirements);

        assert!(recommend_spells(&catalog, &stats, Playstyle::Pyromancer).is_empty());
        assert!(recommend_spells(&catalog, &stats, Playstyle::Knight).is_empty());
    }
}
