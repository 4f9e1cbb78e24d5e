//! Vital phase: front-load vigor, adaptability and endurance.
//!
//! These three stats pay off early regardless of playstyle, so a slice of the
//! budget goes to them before any weight is consulted.
//!
//! 1. Interim targets from the initial budget, capped at 20:
//!    vigor +13%, adaptability +14%, endurance +5%.
//! 2. Top up vigor, then adaptability, then endurance to their targets.
//! 3. Round-robin vigor (< 30) and adaptability (< 20), one point each per
//!    round, until a round grants nothing.

use crate::config::PlannerConfig;
use crate::stats::{Efficiency, Stat, StatBlock, StatCaps, efficiency};

/// Result of the vital phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VitalOutcome {
    pub spent: u32,
    /// Points left for weighted distribution.
    pub remaining: u32,
}

/// Interim targets computed once from the initial budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VitalTargets {
    pub vigor: u32,
    pub adaptability: u32,
    pub endurance: u32,
}

impl VitalTargets {
    pub fn from_budget(block: &StatBlock, points: u32) -> Self {
        Self {
            vigor: share_target(block.vigor, points, 13),
            adaptability: share_target(block.adaptability, points, 14),
            endurance: share_target(block.endurance, points, 5),
        }
    }

    fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Vigor => self.vigor,
            Stat::Adaptability => self.adaptability,
            Stat::Endurance => self.endurance,
            _ => 0,
        }
    }

    /// Targets in top-up order. Vigor wins ties.
    fn in_order(&self) -> [(Stat, u32); 3] {
        Stat::VITAL.map(|stat| (stat, self.get(stat)))
    }
}

/// `current + floor(points * percent / 100)`, capped at the vital target cap.
fn share_target(current: u32, points: u32, percent: u64) -> u32 {
    let cap = u64::from(PlannerConfig::VITAL_TARGET_CAP);
    let target = (u64::from(points) * percent / 100 + u64::from(current)).min(cap);
    // Bounded by the cap, which fits in u32.
    target as u32
}

/// Spends up to `points` on the vital stats without letting the block total
/// pass `target_sum`.
pub fn prioritize_vital_stats(
    block: &mut StatBlock,
    caps: &StatCaps,
    points: u32,
    target_sum: u32,
) -> VitalOutcome {
    if points == 0 {
        return VitalOutcome {
            spent: 0,
            remaining: 0,
        };
    }

    let targets = VitalTargets::from_budget(block, points);
    let mut remaining = points;

    for (stat, target) in targets.in_order() {
        while block.get(stat) < target
            && remaining > 0
            && can_raise(block, caps, stat, target_sum)
        {
            block.add(stat, 1);
            remaining -= 1;
        }
    }

    while remaining > 0
        && (block.vigor < PlannerConfig::VIGOR_ROUND_ROBIN_CAP
            || block.adaptability < PlannerConfig::ADAPTABILITY_ROUND_ROBIN_CAP)
    {
        let mut granted = 0;

        if block.vigor < PlannerConfig::VIGOR_ROUND_ROBIN_CAP
            && can_raise(block, caps, Stat::Vigor, target_sum)
        {
            block.add(Stat::Vigor, 1);
            remaining -= 1;
            granted += 1;
        }

        if remaining > 0
            && block.adaptability < PlannerConfig::ADAPTABILITY_ROUND_ROBIN_CAP
            && can_raise(block, caps, Stat::Adaptability, target_sum)
        {
            block.add(Stat::Adaptability, 1);
            remaining -= 1;
            granted += 1;
        }

        if granted == 0 {
            break;
        }
    }

    VitalOutcome {
        spent: points - remaining,
        remaining,
    }
}

/// Vital points are only spent at half efficiency or better, and never past
/// the target total.
fn can_raise(block: &StatBlock, caps: &StatCaps, stat: Stat, target_sum: u32) -> bool {
    efficiency(caps, stat, block.get(stat)) >= Efficiency::Reduced && block.sum() < target_sum
}
