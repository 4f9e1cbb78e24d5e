//! Stat allocation.
//!
//! A run takes a starting block and a level and spends the point gap in two
//! phases:
//!
//! ```text
//! [ minimums ]  playstyle floors applied up front, overshoot allowed
//!      ↓
//! [ vital ]     vigor / adaptability / endurance front-loading
//!      ↓
//! [ weighted ]  tiers by descending weight, soft-cap fill then even spread
//!      ↓
//! [ floor ]     no stat ends below its starting value
//! ```
//!
//! [`allocate`] is the pure algorithm; [`StatAllocator`] resolves caps and
//! policy from a [`PlannerEnv`](crate::env::PlannerEnv) and then calls it.
mod error;
mod orchestrator;
pub mod tiers;
pub mod vital;

pub use error::{AllocationError, ConfigurationError};
pub use orchestrator::{StatAllocator, allocate};
pub use tiers::{TierOutcome, WeightTier, group_by_weight};
pub use vital::{VitalOutcome, VitalTargets, prioritize_vital_stats};
