//! Weighted phase: spend by weight tier.
//!
//! Stats are grouped by exact weight; tiers run from heaviest to lightest.
//! A tier weighing 1.0 or more first fills its stats to their soft caps. Any
//! tier (or a heavy tier with nothing left to fill) then spreads points one at
//! a time across its stats, sweeping from the last-declared stat to the first.

use crate::config::PlannerConfig;
use crate::policy::{StatWeights, Weight};
use crate::stats::{Efficiency, Stat, StatBlock, StatCaps, efficiency};

/// Outcome of one tier's turn within a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierOutcome {
    /// Soft-cap filling spent points. The caller must restart the pass from
    /// the heaviest tier before any tier spreads evenly.
    SoftCapFilled { spent: u32 },
    /// Even distribution ran; `spent` may be zero.
    Distributed { spent: u32 },
}

impl TierOutcome {
    pub const fn spent(&self) -> u32 {
        match self {
            Self::SoftCapFilled { spent } | Self::Distributed { spent } => *spent,
        }
    }
}

/// Stats sharing one exact weight, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTier {
    pub weight: Weight,
    pub stats: Vec<Stat>,
}

impl WeightTier {
    /// Most points one even-distribution turn may commit to this tier.
    pub fn spread_limit(&self) -> u32 {
        PlannerConfig::EVEN_SPREAD_POINTS_PER_STAT * self.stats.len() as u32
    }

    /// Takes this tier's turn with at most `max_points` to spend.
    pub fn spend(
        &self,
        block: &mut StatBlock,
        caps: &StatCaps,
        max_points: u32,
        target_sum: u32,
    ) -> TierOutcome {
        if self.weight >= Weight::ONE {
            let spent = self.fill_to_soft_caps(block, caps, max_points, target_sum);
            if spent > 0 {
                return TierOutcome::SoftCapFilled { spent };
            }
        }

        let limit = max_points.min(self.spread_limit());
        TierOutcome::Distributed {
            spent: self.distribute_evenly(block, caps, limit, target_sum),
        }
    }

    /// Raises each stat below its soft cap straight to it, in declaration
    /// order, until the budget runs out.
    pub fn fill_to_soft_caps(
        &self,
        block: &mut StatBlock,
        caps: &StatCaps,
        max_points: u32,
        target_sum: u32,
    ) -> u32 {
        let mut spent = 0;

        for &stat in &self.stats {
            if spent >= max_points {
                break;
            }
            let headroom = target_sum.saturating_sub(block.sum());
            if headroom == 0 {
                break;
            }

            let value = block.get(stat);
            let soft_cap = caps.soft_cap(stat);
            if value < soft_cap {
                let points = (soft_cap - value).min(max_points - spent).min(headroom);
                block.add(stat, points);
                spent += points;
            }
        }

        spent
    }

    /// Grants one point per eligible stat per sweep, last-declared stat
    /// first, until `max_points` are spent or a sweep grants nothing.
    pub fn distribute_evenly(
        &self,
        block: &mut StatBlock,
        caps: &StatCaps,
        max_points: u32,
        target_sum: u32,
    ) -> u32 {
        let mut spent = 0;

        while spent < max_points {
            let mut granted = 0;

            for &stat in self.stats.iter().rev() {
                if spent >= max_points || block.sum() >= target_sum {
                    break;
                }
                // Minimal is the lowest band, so this only filters if the
                // model ever gains a zero band.
                if efficiency(caps, stat, block.get(stat)) >= Efficiency::Minimal {
                    block.add(stat, 1);
                    spent += 1;
                    granted += 1;
                }
            }

            if granted == 0 {
                break;
            }
        }

        spent
    }
}

/// Groups positively weighted stats into tiers, heaviest first.
///
/// Stats weighing zero or less are left out entirely.
pub fn group_by_weight(weights: &StatWeights) -> Vec<WeightTier> {
    let mut tiers: Vec<WeightTier> = Vec::new();

    for (stat, weight) in weights.iter() {
        if !weight.is_positive() {
            continue;
        }
        match tiers.iter_mut().find(|tier| tier.weight == weight) {
            Some(tier) => tier.stats.push(stat),
            None => tiers.push(WeightTier {
                weight,
                stats: vec![stat],
            }),
        }
    }

    tiers.sort_by(|a, b| b.weight.cmp(&a.weight));
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatCapPair;

    fn w(value: f64) -> Weight {
        Weight::from(value)
    }

    #[test]
    fn tiers_are_heaviest_first_with_declaration_order_inside() {
        let weights = StatWeights::from_pairs(&[
            (Stat::Vigor, w(0.4)),
            (Stat::Endurance, w(0.6)),
            (Stat::Vitality, w(0.1)),
            (Stat::Adaptability, w(0.8)),
            (Stat::Strength, w(0.1)),
            (Stat::Attunement, w(0.1)),
        ]);

        let tiers = group_by_weight(&weights);

        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers[0].stats, vec![Stat::Adaptability]);
        assert_eq!(tiers[1].stats, vec![Stat::Endurance]);
        assert_eq!(tiers[2].stats, vec![Stat::Vigor]);
        assert_eq!(
            tiers[3].stats,
            vec![Stat::Vitality, Stat::Strength, Stat::Attunement]
        );
    }

    #[test]
    fn non_positive_weights_are_excluded() {
        let weights = StatWeights::from_pairs(&[
            (Stat::Vigor, w(0.0)),
            (Stat::Faith, w(-0.2)),
            (Stat::Dexterity, w(0.3)),
        ]);

        let tiers = group_by_weight(&weights);

        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].stats, vec![Stat::Dexterity]);
    }

    #[test]
    fn heavy_tier_fills_soft_caps_in_order() {
        let caps = StatCaps::from_pairs(&[(Stat::Faith, StatCapPair::new(40, 50))]);
        let tier = WeightTier {
            weight: w(1.5),
            stats: vec![Stat::Strength, Stat::Faith],
        };
        let mut block = StatBlock::uniform(10);

        let outcome = tier.spend(&mut block, &caps, 25, 1000);

        // Strength needs 20 to reach 30, faith gets the last 5.
        assert_eq!(outcome, TierOutcome::SoftCapFilled { spent: 25 });
        assert_eq!(block.strength, 30);
        assert_eq!(block.faith, 15);
    }

    #[test]
    fn heavy_tier_at_soft_caps_spreads_evenly() {
        let caps = StatCaps::default();
        let tier = WeightTier {
            weight: w(1.0),
            stats: vec![Stat::Strength, Stat::Dexterity],
        };
        let mut block = StatBlock::uniform(30);

        let outcome = tier.spend(&mut block, &caps, 100, 1000);

        assert_eq!(outcome, TierOutcome::Distributed { spent: 10 });
        assert_eq!(block.strength, 35);
        assert_eq!(block.dexterity, 35);
    }

    #[test]
    fn light_tier_never_fills_soft_caps() {
        let caps = StatCaps::default();
        let tier = WeightTier {
            weight: w(0.9),
            stats: vec![Stat::Strength],
        };
        let mut block = StatBlock::uniform(6);

        let outcome = tier.spend(&mut block, &caps, 100, 1000);

        assert_eq!(outcome, TierOutcome::Distributed { spent: 5 });
        assert_eq!(block.strength, 11);
    }

    #[test]
    fn even_sweep_starts_from_last_declared_stat() {
        let caps = StatCaps::default();
        let tier = WeightTier {
            weight: w(0.1),
            stats: vec![Stat::Strength, Stat::Dexterity, Stat::Intelligence],
        };
        let mut block = StatBlock::uniform(6);

        let spent = tier.distribute_evenly(&mut block, &caps, 2, 1000);

        assert_eq!(spent, 2);
        assert_eq!(block.intelligence, 7);
        assert_eq!(block.dexterity, 7);
        assert_eq!(block.strength, 6);
    }

    #[test]
    fn spending_stops_at_target_sum() {
        let caps = StatCaps::default();
        let tier = WeightTier {
            weight: w(0.5),
            stats: vec![Stat::Strength, Stat::Dexterity],
        };
        let mut block = StatBlock::uniform(6);
        let target = block.sum() + 3;

        let outcome = tier.spend(&mut block, &caps, 10, target);

        assert_eq!(outcome.spent(), 3);
        assert_eq!(block.sum(), target);
    }

    #[test]
    fn hard_capped_stat_still_receives_points() {
        let caps = StatCaps::from_pairs(&[(Stat::Strength, StatCapPair::new(30, 50))]);
        let tier = WeightTier {
            weight: w(0.6),
            stats: vec![Stat::Strength],
        };
        let mut block = StatBlock::uniform(6);
        block.strength = 55;

        let outcome = tier.spend(&mut block, &caps, 3, 1000);

        assert_eq!(outcome, TierOutcome::Distributed { spent: 3 });
        assert_eq!(block.strength, 58);
    }
}
