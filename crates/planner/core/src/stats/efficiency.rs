//! Diminishing-returns model.
//!
//! Efficiency is a selection priority, not a game value: it only biases which
//! stat gets the next point. It never reaches zero, so a stat past its hard cap
//! can still absorb points once nothing better is left.

use super::caps::StatCaps;
use super::stat::Stat;

/// Efficiency band of a stat at its current value.
///
/// Ordered from least to most efficient so bands compare naturally
/// (`Efficiency::Reduced >= Efficiency::Minimal`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Efficiency {
    /// At or past the hard cap (×0.1).
    Minimal,
    /// Between soft and hard cap (×0.5).
    Reduced,
    /// Below the soft cap (×1.0).
    Full,
}

impl Efficiency {
    /// Multiplier associated with this band.
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Reduced => 0.5,
            Self::Minimal => 0.1,
        }
    }
}

/// Efficiency of putting a point into `stat` when it currently sits at `value`.
pub fn efficiency(caps: &StatCaps, stat: Stat, value: u32) -> Efficiency {
    let pair = caps.get(stat);
    if value < pair.soft {
        Efficiency::Full
    } else if value < pair.hard {
        Efficiency::Reduced
    } else {
        Efficiency::Minimal
    }
}
