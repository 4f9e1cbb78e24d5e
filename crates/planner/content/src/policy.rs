//! Policy table composition.
//!
//! Profiles are composed in three layers:
//!
//! ```text
//! [ base weights ]              shared by every build
//!       ↓  + priority adjustments (additive)
//! [ priority weights ]
//!       ↓  playstyle weights replace, playstyle minimums attach
//! [ RequirementProfile ]
//! ```
//!
//! Weights are exact hundredths, so `0.8 - 0.4` composes to the same tier
//! as a literal `0.4`.

use planner_core::{
    Playstyle, PolicyOracle, Priority, RequirementProfile, Stat, StatWeights, Weight,
};

/// Additive weight changes for one priority.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityAdjustment {
    pub priority: Priority,
    pub adjustments: Vec<(Stat, Weight)>,
}

/// Minimums and weight overrides for one playstyle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaystyleRule {
    pub playstyle: Playstyle,
    pub minimums: Vec<(Stat, u32)>,
    /// Replaces the priority-adjusted weight of each listed stat.
    pub weights: Vec<(Stat, Weight)>,
}

/// Policy as written in `policy.ron`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicySpec {
    pub base_weights: Vec<(Stat, Weight)>,
    pub priorities: Vec<PriorityAdjustment>,
    pub playstyles: Vec<PlaystyleRule>,
}

/// Closed lookup table from `(Playstyle, Priority)` to a requirement profile.
///
/// A pair resolves only if both its priority and its playstyle have an
/// entry; nothing is defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyTable {
    base: StatWeights,
    priorities: [Option<Vec<(Stat, Weight)>>; Priority::COUNT],
    playstyles: [Option<PlaystyleRule>; Playstyle::COUNT],
}

impl PolicyTable {
    /// Builds a table from its file form. Later entries for the same
    /// priority or playstyle replace earlier ones.
    pub fn from_spec(spec: PolicySpec) -> Self {
        let mut table = Self {
            base: StatWeights::from_pairs(&spec.base_weights),
            ..Self::default()
        };

        for entry in spec.priorities {
            table.priorities[entry.priority as usize] = Some(entry.adjustments);
        }
        for rule in spec.playstyles {
            let index = rule.playstyle as usize;
            table.playstyles[index] = Some(rule);
        }

        table
    }

    /// Base weights with the priority adjustment applied and no playstyle
    /// minimums.
    pub fn base_profile(&self, priority: Priority) -> Option<RequirementProfile> {
        let adjustments = self.priorities[priority as usize].as_ref()?;

        let mut weights = self.base;
        for &(stat, delta) in adjustments {
            weights.adjust(stat, delta);
        }

        Some(RequirementProfile::new(Vec::new(), weights))
    }

    /// Full profile for a playstyle under a priority.
    pub fn profile(&self, playstyle: Playstyle, priority: Priority) -> Option<RequirementProfile> {
        let rule = self.playstyles[playstyle as usize].as_ref()?;
        let mut profile = self.base_profile(priority)?;

        for &(stat, weight) in &rule.weights {
            profile.weights.set(stat, weight);
        }
        profile.minimums = rule.minimums.clone();

        Some(profile)
    }

    pub fn has_priority(&self, priority: Priority) -> bool {
        self.priorities[priority as usize].is_some()
    }

    pub fn has_playstyle(&self, playstyle: Playstyle) -> bool {
        self.playstyles[playstyle as usize].is_some()
    }
}

impl PolicyOracle for PolicyTable {
    fn requirement_profile(
        &self,
        playstyle: Playstyle,
        priority: Priority,
    ) -> Option<RequirementProfile> {
        self.profile(playstyle, priority)
    }
}
