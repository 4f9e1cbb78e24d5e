//! Soft/hard cap table for diminishing returns.

use super::stat::Stat;

/// Soft and hard cap for a single stat.
///
/// Below the soft cap every point is fully efficient; between the caps each
/// point is worth half; at or past the hard cap a point is a last resort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatCapPair {
    pub soft: u32,
    pub hard: u32,
}

impl StatCapPair {
    /// Caps used for any stat missing from the table.
    pub const DEFAULT: Self = Self::new(30, 50);

    pub const fn new(soft: u32, hard: u32) -> Self {
        Self { soft, hard }
    }
}

impl Default for StatCapPair {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cap pairs for every stat.
///
/// Built from a sparse list; stats that are not listed fall back to
/// [`StatCapPair::DEFAULT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCaps {
    caps: [StatCapPair; Stat::COUNT],
}

impl Default for StatCaps {
    fn default() -> Self {
        Self {
            caps: [StatCapPair::DEFAULT; Stat::COUNT],
        }
    }
}

impl StatCaps {
    /// Builds a table from `(stat, caps)` pairs. Later entries win.
    pub fn from_pairs(pairs: &[(Stat, StatCapPair)]) -> Self {
        let mut table = Self::default();
        for (stat, pair) in pairs {
            table.caps[stat.as_index()] = *pair;
        }
        table
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> StatCapPair {
        self.caps[stat.as_index()]
    }

    #[inline]
    pub fn soft_cap(&self, stat: Stat) -> u32 {
        self.get(stat).soft
    }

    #[inline]
    pub fn hard_cap(&self, stat: Stat) -> u32 {
        self.get(stat).hard
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, StatCapPair)> + '_ {
        Stat::all().into_iter().map(|stat| (stat, self.get(stat)))
    }
}
