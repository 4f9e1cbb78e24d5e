//! Sequencing of the allocation phases.

use super::error::{AllocationError, ConfigurationError};
use super::tiers::{TierOutcome, group_by_weight};
use super::vital::prioritize_vital_stats;
use crate::config::PlannerConfig;
use crate::env::PlannerEnv;
use crate::policy::{Playstyle, Priority, RequirementProfile};
use crate::stats::{Stat, StatBlock, StatCaps};

/// Allocates a starting block up to the point total of `level`.
///
/// Pure function of its inputs. The returned block:
/// - never has a stat below `starting`,
/// - meets every minimum in `profile`,
/// - sums exactly to `config.target_stat_sum(level)`, unless the
///   minimum-adjusted starting block already reaches it, in which case that
///   block is returned unchanged.
///
/// # Errors
///
/// Returns `ConfigurationError::NoPositiveWeights` if no stat in `profile`
/// carries a positive weight.
pub fn allocate(
    starting: &StatBlock,
    level: u32,
    profile: &RequirementProfile,
    caps: &StatCaps,
    config: &PlannerConfig,
) -> Result<StatBlock, ConfigurationError> {
    if !profile.weights.has_positive_weight() {
        return Err(ConfigurationError::NoPositiveWeights);
    }

    let mut block = *starting;
    let raised = profile.apply_minimums(&mut block);
    let target_sum = config.target_stat_sum(level);

    tracing::debug!(
        "Allocating level {} (target sum {}): start sum {}, minimums added {}",
        level,
        target_sum,
        starting.sum(),
        raised
    );

    if block.sum() < target_sum {
        let points = target_sum - block.sum();
        let vital = prioritize_vital_stats(&mut block, caps, points, target_sum);
        tracing::debug!(
            "  Vital phase spent {} of {} points",
            vital.spent,
            points
        );

        spend_weighted(&mut block, caps, profile, target_sum);
    } else {
        tracing::debug!("  Target already met; no points to spend");
    }

    restore_starting_floor(&mut block, starting);
    Ok(block)
}

/// Runs weighted passes until the block reaches `target_sum` or a full pass
/// spends nothing.
fn spend_weighted(
    block: &mut StatBlock,
    caps: &StatCaps,
    profile: &RequirementProfile,
    target_sum: u32,
) {
    let tiers = group_by_weight(&profile.weights);
    let mut passes = 0u32;

    'passes: loop {
        if block.sum() >= target_sum {
            break;
        }
        passes += 1;
        let mut pass_spent = 0;

        for tier in &tiers {
            let remaining = target_sum.saturating_sub(block.sum());
            if remaining == 0 {
                break;
            }

            match tier.spend(block, caps, remaining, target_sum) {
                TierOutcome::SoftCapFilled { spent } => {
                    tracing::debug!(
                        "  Tier {} filled soft caps with {} points; restarting pass",
                        tier.weight,
                        spent
                    );
                    continue 'passes;
                }
                TierOutcome::Distributed { spent } => pass_spent += spent,
            }
        }

        if pass_spent == 0 {
            tracing::warn!(
                "Weighted distribution exhausted with {} points unspent",
                target_sum.saturating_sub(block.sum())
            );
            break;
        }
    }

    tracing::debug!("  Weighted phase finished after {} passes", passes);
}

/// Raises any stat that ended below its starting value back up to it.
fn restore_starting_floor(block: &mut StatBlock, starting: &StatBlock) {
    for stat in Stat::all() {
        if block.get(stat) < starting.get(stat) {
            block.set(stat, starting.get(stat));
        }
    }
}

/// Allocation entry point bound to the planner's oracles.
///
/// Caps and policy are read from the environment at the start of every call
/// and treated as immutable for that run.
pub struct StatAllocator<'a> {
    env: PlannerEnv<'a>,
    config: PlannerConfig,
}

impl<'a> StatAllocator<'a> {
    pub fn new(env: PlannerEnv<'a>, config: PlannerConfig) -> Self {
        Self { env, config }
    }

    /// Recommends a final stat block for `level`.
    ///
    /// # Errors
    ///
    /// - `AllocationError::Oracle` if the caps or policy oracle is missing.
    /// - `AllocationError::Configuration` if the policy has no usable profile
    ///   for `(playstyle, priority)`.
    pub fn distribute_stats(
        &self,
        starting: &StatBlock,
        level: u32,
        playstyle: Playstyle,
        priority: Priority,
    ) -> Result<StatBlock, AllocationError> {
        let caps = self.env.caps()?.stat_caps();
        let profile = self
            .env
            .policy()?
            .requirement_profile(playstyle, priority)
            .ok_or(ConfigurationError::MissingProfile {
                playstyle,
                priority,
            })?;

        tracing::debug!("Resolved profile for {}/{}", playstyle, priority);

        Ok(allocate(starting, level, &profile, &caps, &self.config)?)
    }
}
