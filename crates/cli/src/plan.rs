//! Request validation and plan assembly.

use anyhow::{Context, Result};
use serde::Serialize;

use planner_content::ContentStore;
use planner_core::{
    Playstyle, Priority, Recommendation, RollProfile, Spell, StartingClass, StatBlock, Weapon,
    recommend_spells, recommend_weapons,
};

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanRequest {
    pub class: String,
    pub level: u32,
    pub playstyle: Playstyle,
    pub priority: Priority,
}

/// A finished build with everything the report shows.
#[derive(Debug, Serialize)]
pub struct BuildPlan<'a> {
    pub class: &'a StartingClass,
    pub level: u32,
    pub playstyle: String,
    pub priority: String,
    pub stats: StatBlock,
    pub roll: RollProfile,
    pub weapons: Vec<Recommendation<'a, Weapon>>,
    /// Empty when the playstyle does not cast.
    pub spells: Vec<Recommendation<'a, Spell>>,
    pub uses_magic: bool,
}

/// Validates `request` against the loaded content and runs the allocator.
///
/// # Errors
///
/// Fails for an unknown class, a level outside
/// `[class.starting_level, max_level]`, or a policy that cannot serve the
/// playstyle/priority pair.
pub fn build_plan<'a>(store: &'a ContentStore, request: &PlanRequest) -> Result<BuildPlan<'a>> {
    let env = store.env();
    let class = env
        .starting_class(&request.class)
        .with_context(|| format!("Unknown class '{}'", request.class))?;

    let range = class.level_range(store.config.max_level);
    if !range.contains(&request.level) {
        anyhow::bail!(
            "Level {} is out of range for {}: choose a level from {} to {}",
            request.level,
            class.name,
            range.start(),
            range.end()
        );
    }

    tracing::info!(
        "Planning {} at level {} as {} ({})",
        class.name,
        request.level,
        request.playstyle,
        request.priority
    );

    let stats = store
        .allocator()
        .distribute_stats(&class.stats, request.level, request.playstyle, request.priority)
        .with_context(|| {
            format!(
                "Cannot plan {} with priority {}",
                request.playstyle, request.priority
            )
        })?;

    let spells = recommend_spells(store, &stats, request.playstyle);
    let uses_magic = planner_core::SpellSchool::for_playstyle(request.playstyle).is_some();

    Ok(BuildPlan {
        class,
        level: request.level,
        playstyle: request.playstyle.to_string(),
        priority: request.priority.to_string(),
        stats,
        roll: RollProfile::from_stats(&stats),
        weapons: recommend_weapons(store, &stats),
        spells,
        uses_magic,
    })
}
