//! Allocation policy inputs: playstyles, priorities, weights and minimums.
//!
//! The core never decides policy. A [`RequirementProfile`] is produced by a
//! [`PolicyOracle`](crate::env::PolicyOracle) for a `(Playstyle, Priority)`
//! pair and consumed as opaque input by the allocator.

use crate::stats::{Stat, StatBlock};

/// Build archetype selecting minimum floors and weight overrides.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Playstyle {
    Barbarian,
    Swordsman,
    Knight,
    Defender,
    Priest,
    Mage,
    Hexer,
    MagicSwordsman,
    MageBarbarian,
    Paladin,
    FaithDex,
    HexerPhysical,
    Pyromancer,
    PyroPhysical,
}

impl Playstyle {
    pub const COUNT: usize = 14;

    pub const fn all() -> [Playstyle; Self::COUNT] {
        [
            Playstyle::Barbarian,
            Playstyle::Swordsman,
            Playstyle::Knight,
            Playstyle::Defender,
            Playstyle::Priest,
            Playstyle::Mage,
            Playstyle::Hexer,
            Playstyle::MagicSwordsman,
            Playstyle::MageBarbarian,
            Playstyle::Paladin,
            Playstyle::FaithDex,
            Playstyle::HexerPhysical,
            Playstyle::Pyromancer,
            Playstyle::PyroPhysical,
        ]
    }
}

/// Secondary focus applied as an additive adjustment to the base weights.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Priority {
    Survivability,
    Evasion,
    Damage,
    Versatility,
}

impl Priority {
    pub const COUNT: usize = 4;

    pub const fn all() -> [Priority; Self::COUNT] {
        [
            Priority::Survivability,
            Priority::Evasion,
            Priority::Damage,
            Priority::Versatility,
        ]
    }
}

/// Priority weight of a stat, stored as exact hundredths.
///
/// Stats are grouped into tiers by exact weight equality, so weights are kept
/// as integers: `0.8 - 0.4` and `0.4` land in the same tier. Data files write
/// weights as decimals; conversion rounds to the nearest hundredth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "f64", into = "f64")
)]
pub struct Weight(i32);

impl Weight {
    pub const ZERO: Self = Self(0);
    /// Tiers at or above this weight fill to soft cap before spreading.
    pub const ONE: Self = Self(100);

    pub const fn from_hundredths(hundredths: i32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> i32 {
        self.0
    }

    /// Returns true if the stat takes part in weighted distribution.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self((value * 100.0).round() as i32)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.as_f64()
    }
}

impl core::ops::Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

impl core::fmt::Display for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

/// A weight for every stat. Unlisted stats weigh zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatWeights {
    weights: [Weight; Stat::COUNT],
}

impl StatWeights {
    /// Builds weights from `(stat, weight)` pairs. Later entries win.
    pub fn from_pairs(pairs: &[(Stat, Weight)]) -> Self {
        let mut table = Self::default();
        for (stat, weight) in pairs {
            table.set(*stat, *weight);
        }
        table
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> Weight {
        self.weights[stat.as_index()]
    }

    #[inline]
    pub fn set(&mut self, stat: Stat, weight: Weight) {
        self.weights[stat.as_index()] = weight;
    }

    /// Adds `delta` to the weight of `stat`.
    pub fn adjust(&mut self, stat: Stat, delta: Weight) {
        let index = stat.as_index();
        self.weights[index] = self.weights[index] + delta;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, Weight)> + '_ {
        Stat::all().into_iter().map(|stat| (stat, self.get(stat)))
    }

    pub fn has_positive_weight(&self) -> bool {
        self.weights.iter().any(|weight| weight.is_positive())
    }
}

/// Minimum floors and weights driving one allocation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequirementProfile {
    /// Sparse floors; a stat below its floor is raised to it before spending.
    pub minimums: Vec<(Stat, u32)>,
    pub weights: StatWeights,
}

impl RequirementProfile {
    pub fn new(minimums: Vec<(Stat, u32)>, weights: StatWeights) -> Self {
        Self { minimums, weights }
    }

    /// Floor for `stat`, if any. The highest listed floor wins.
    pub fn minimum(&self, stat: Stat) -> Option<u32> {
        self.minimums
            .iter()
            .filter(|(listed, _)| *listed == stat)
            .map(|(_, floor)| *floor)
            .max()
    }

    /// Raises every stat with a floor up to it. Never lowers a value.
    ///
    /// Returns the number of points added.
    pub fn apply_minimums(&self, block: &mut StatBlock) -> u32 {
        let mut added = 0;
        for &(stat, floor) in &self.minimums {
            let value = block.get(stat);
            if value < floor {
                block.set(stat, floor);
                added += floor - value;
            }
        }
        added
    }

    /// Returns true if `block` meets every floor.
    pub fn minimums_met(&self, block: &StatBlock) -> bool {
        self.minimums
            .iter()
            .all(|&(stat, floor)| block.get(stat) >= floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn weight_conversion_is_exact_in_hundredths() {
        let vigor = Weight::from(0.8) + Weight::from(-0.4);
        assert_eq!(vigor, Weight::from(0.4));
        assert_eq!(Weight::from(0.6) + Weight::from(0.2), Weight::from(0.8));
        assert_eq!(Weight::from(1.3).hundredths(), 130);
        assert!(Weight::from(1.0) >= Weight::ONE);
        assert!(!(Weight::from(0.3) + Weight::from(-0.3)).is_positive());
    }

    #[test]
    fn minimums_only_raise() {
        let profile = RequirementProfile::new(
            vec![(Stat::Vigor, 10), (Stat::Strength, 4)],
            StatWeights::default(),
        );
        let mut block = StatBlock::uniform(6);

        let added = profile.apply_minimums(&mut block);

        assert_eq!(added, 4);
        assert_eq!(block.vigor, 10);
        assert_eq!(block.strength, 6);
        assert!(profile.minimums_met(&block));
        assert_eq!(profile.minimum(Stat::Vigor), Some(10));
        assert_eq!(profile.minimum(Stat::Faith), None);
    }

    #[test]
    fn playstyle_names_round_trip_through_strum() {
        for playstyle in Playstyle::all() {
            let parsed = Playstyle::from_str(playstyle.as_ref()).unwrap();
            assert_eq!(parsed, playstyle);
        }
        assert_eq!(Playstyle::MagicSwordsman.to_string(), "magic_swordsman");
        assert_eq!(Priority::from_str("damage").unwrap(), Priority::Damage);
    }
}
