//! The closed set of allocatable character stats.

/// A character stat that can receive level-up points.
///
/// Variants are listed in declaration order. That order is significant: it is
/// the tie-break order used when several stats share a weight tier, and the
/// order in which stat blocks are displayed.
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
pub enum Stat {
    /// Health pool.
    Vigor = 0,
    /// Stamina pool.
    Endurance = 1,
    /// Equip load.
    Vitality = 2,
    /// Agility and poise resistances.
    Adaptability = 3,
    Strength = 4,
    Dexterity = 5,
    Intelligence = 6,
    Faith = 7,
    /// Spell slots and casting speed.
    Attunement = 8,
}

impl Stat {
    /// Total number of stats.
    pub const COUNT: usize = 9;

    /// Stats that receive front-loaded points before weighted distribution,
    /// in the order they are topped up.
    pub const VITAL: [Stat; 3] = [Stat::Vigor, Stat::Adaptability, Stat::Endurance];

    /// Returns all stats in declaration order.
    pub const fn all() -> [Stat; Self::COUNT] {
        [
            Stat::Vigor,
            Stat::Endurance,
            Stat::Vitality,
            Stat::Adaptability,
            Stat::Strength,
            Stat::Dexterity,
            Stat::Intelligence,
            Stat::Faith,
            Stat::Attunement,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}
