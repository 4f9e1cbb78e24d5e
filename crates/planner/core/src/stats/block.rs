//! Stat blocks - one non-negative value per [`Stat`].

use super::stat::Stat;

/// A complete set of stat values.
///
/// Stat blocks are plain values: the allocator copies the starting block,
/// mutates its own copy through the spending phases and hands it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub vigor: u32,
    pub endurance: u32,
    pub vitality: u32,
    pub adaptability: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub faith: u32,
    pub attunement: u32,
}

impl StatBlock {
    /// Creates a block with every stat set to `value`.
    pub const fn uniform(value: u32) -> Self {
        Self {
            vigor: value,
            endurance: value,
            vitality: value,
            adaptability: value,
            strength: value,
            dexterity: value,
            intelligence: value,
            faith: value,
            attunement: value,
        }
    }

    /// Creates a block from values listed in [`Stat::all`] order.
    pub const fn from_array(values: [u32; Stat::COUNT]) -> Self {
        Self {
            vigor: values[0],
            endurance: values[1],
            vitality: values[2],
            adaptability: values[3],
            strength: values[4],
            dexterity: values[5],
            intelligence: values[6],
            faith: values[7],
            attunement: values[8],
        }
    }

    /// Returns the values in [`Stat::all`] order.
    pub const fn to_array(&self) -> [u32; Stat::COUNT] {
        [
            self.vigor,
            self.endurance,
            self.vitality,
            self.adaptability,
            self.strength,
            self.dexterity,
            self.intelligence,
            self.faith,
            self.attunement,
        ]
    }

    #[inline]
    pub const fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Vigor => self.vigor,
            Stat::Endurance => self.endurance,
            Stat::Vitality => self.vitality,
            Stat::Adaptability => self.adaptability,
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Faith => self.faith,
            Stat::Attunement => self.attunement,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Vigor => &mut self.vigor,
            Stat::Endurance => &mut self.endurance,
            Stat::Vitality => &mut self.vitality,
            Stat::Adaptability => &mut self.adaptability,
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Faith => &mut self.faith,
            Stat::Attunement => &mut self.attunement,
        }
    }

    #[inline]
    pub fn set(&mut self, stat: Stat, value: u32) {
        *self.get_mut(stat) = value;
    }

    /// Adds `points` to a single stat.
    #[inline]
    pub fn add(&mut self, stat: Stat, points: u32) {
        *self.get_mut(stat) += points;
    }

    /// Total of all stat values.
    pub fn sum(&self) -> u32 {
        self.to_array().iter().sum()
    }

    /// Iterates `(stat, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::all().into_iter().map(|stat| (stat, self.get(stat)))
    }

    /// Returns true if no stat in `self` is lower than in `other`.
    pub fn dominates(&self, other: &StatBlock) -> bool {
        Stat::all()
            .into_iter()
            .all(|stat| self.get(stat) >= other.get(stat))
    }
}

impl core::ops::Index<Stat> for StatBlock {
    type Output = u32;

    fn index(&self, stat: Stat) -> &u32 {
        match stat {
            Stat::Vigor => &self.vigor,
            Stat::Endurance => &self.endurance,
            Stat::Vitality => &self.vitality,
            Stat::Adaptability => &self.adaptability,
            Stat::Strength => &self.strength,
            Stat::Dexterity => &self.dexterity,
            Stat::Intelligence => &self.intelligence,
            Stat::Faith => &self.faith,
            Stat::Attunement => &self.attunement,
        }
    }
}

impl core::ops::IndexMut<Stat> for StatBlock {
    fn index_mut(&mut self, stat: Stat) -> &mut u32 {
        self.get_mut(stat)
    }
}
