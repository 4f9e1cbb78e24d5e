//! Deterministic stat planning shared by the content loaders and front-ends.
//!
//! `planner-core` owns the stat model, the allocation policy types and the
//! allocation algorithm itself. Everything here is a pure function of its
//! inputs: read-only data (caps, policy, catalog) arrives through the oracle
//! traits in [`env`], and [`allocation::StatAllocator`] is the single entry
//! point that turns a starting block and a level into a recommended build.
pub mod allocation;
pub mod catalog;
pub mod config;
pub mod derived;
pub mod env;
pub mod error;
pub mod policy;
pub mod stats;

pub use allocation::{
    AllocationError, ConfigurationError, StatAllocator, TierOutcome, VitalOutcome, WeightTier,
    allocate, group_by_weight, prioritize_vital_stats,
};
pub use catalog::{
    Recommendation, Spell, SpellRequirements, SpellSchool, StartingClass, Weapon,
    WeaponRequirements, recommend_spells, recommend_weapons,
};
pub use config::PlannerConfig;
pub use derived::{RollProfile, calculate_agility, i_frames};
pub use env::{CapsOracle, CatalogOracle, Env, OracleError, PlannerEnv, PolicyOracle};
pub use error::{ErrorSeverity, PlannerError};
pub use policy::{Playstyle, Priority, RequirementProfile, StatWeights, Weight};
pub use stats::{Efficiency, Stat, StatBlock, StatCapPair, StatCaps, efficiency};
