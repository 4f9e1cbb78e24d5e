/// Planner configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Stat total of a level 1 character. The point budget at level `n` is
    /// `base_stat_total + n`.
    pub base_stat_total: u32,

    /// Highest level a caller may request.
    pub max_level: u32,
}

impl PlannerConfig {
    // ===== allocation policy constants =====
    /// Interim targets of the vital phase never exceed this value.
    pub const VITAL_TARGET_CAP: u32 = 20;
    /// Round-robin top-up stops raising vigor at this value.
    pub const VIGOR_ROUND_ROBIN_CAP: u32 = 30;
    /// Round-robin top-up stops raising adaptability at this value.
    pub const ADAPTABILITY_ROUND_ROBIN_CAP: u32 = 20;
    /// Even distribution commits at most this many points per stat in a tier
    /// before the global budget is re-evaluated.
    pub const EVEN_SPREAD_POINTS_PER_STAT: u32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_STAT_TOTAL: u32 = 53;
    pub const DEFAULT_MAX_LEVEL: u32 = 838;

    pub fn new() -> Self {
        Self {
            base_stat_total: Self::DEFAULT_BASE_STAT_TOTAL,
            max_level: Self::DEFAULT_MAX_LEVEL,
        }
    }

    /// Total stat points available at `level`. Saturates at `u32::MAX`.
    pub const fn target_stat_sum(&self, level: u32) -> u32 {
        self.base_stat_total.saturating_add(level)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
