//! Stat model: the stat set, stat blocks, cap table and efficiency bands.
//!
//! ```text
//! [ Stat ]  closed set, declaration order = tie-break order
//!    ↓
//! [ StatBlock ]  one value per stat, owned by each allocation run
//!    ↓
//! [ StatCaps → Efficiency ]  diminishing returns per stat
//! ```

pub mod block;
pub mod caps;
pub mod efficiency;
pub mod stat;

pub use block::StatBlock;
pub use caps::{StatCapPair, StatCaps};
pub use efficiency::{Efficiency, efficiency};
pub use stat::Stat;
