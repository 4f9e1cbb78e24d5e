//! In-memory content implementing every planner oracle.

use planner_core::{
    CapsOracle, CatalogOracle, Env, PlannerConfig, PlannerEnv, Playstyle, PolicyOracle, Priority,
    RequirementProfile, Spell, SpellSchool, StartingClass, StatAllocator, StatCaps, Weapon,
};

use crate::policy::PolicyTable;

/// Loaded planner content.
///
/// Built once by a loader and then only read. Serves caps, policy and the
/// class/weapon/spell catalog to the allocator and front-ends.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    pub config: PlannerConfig,
    pub caps: StatCaps,
    pub policy: PolicyTable,
    pub classes: Vec<StartingClass>,
    pub weapons: Vec<Weapon>,
    pub spells: Vec<Spell>,
}

impl ContentStore {
    /// Environment with every oracle backed by this store.
    pub fn env(&self) -> PlannerEnv<'_> {
        Env::with_all(self, self, self).as_planner_env()
    }

    /// Allocator bound to this store and its configuration.
    pub fn allocator(&self) -> StatAllocator<'_> {
        StatAllocator::new(self.env(), self.config.clone())
    }
}

impl CapsOracle for ContentStore {
    fn stat_caps(&self) -> StatCaps {
        self.caps
    }
}

impl PolicyOracle for ContentStore {
    fn requirement_profile(
        &self,
        playstyle: Playstyle,
        priority: Priority,
    ) -> Option<RequirementProfile> {
        self.policy.profile(playstyle, priority)
    }
}

impl CatalogOracle for ContentStore {
    fn starting_classes(&self) -> &[StartingClass] {
        &self.classes
    }

    fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    fn spells(&self, school: SpellSchool) -> Vec<&Spell> {
        self.spells
            .iter()
            .filter(|spell| spell.school == school)
            .collect()
    }
}
