//! Content factory for building a store from data files.

use std::path::{Path, PathBuf};

use planner_core::{PlannerConfig, Spell, StartingClass, StatCaps, Weapon};

use crate::loaders::{CapsLoader, CatalogLoader, ConfigLoader, LoadResult, PolicyLoader};
use crate::policy::PolicyTable;
use crate::store::ContentStore;

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── stat_caps.ron
/// ├── policy.ron
/// ├── classes.ron
/// ├── weapons.ron
/// └── spells.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the cap table from `stat_caps.ron`.
    pub fn load_caps(&self) -> LoadResult<StatCaps> {
        CapsLoader::load(&self.data_dir.join("stat_caps.ron"))
    }

    /// Load the policy table from `policy.ron`.
    pub fn load_policy(&self) -> LoadResult<PolicyTable> {
        PolicyLoader::load(&self.data_dir.join("policy.ron"))
    }

    /// Load starting classes from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<Vec<StartingClass>> {
        CatalogLoader::load_classes(&self.data_dir.join("classes.ron"))
    }

    /// Load the weapon catalog from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<Vec<Weapon>> {
        CatalogLoader::load_weapons(&self.data_dir.join("weapons.ron"))
    }

    /// Load the spell catalog from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<Vec<Spell>> {
        CatalogLoader::load_spells(&self.data_dir.join("spells.ron"))
    }

    /// Loads every file and assembles a store.
    pub fn build(&self) -> LoadResult<ContentStore> {
        tracing::debug!("Loading planner content from {}", self.data_dir.display());

        assemble(
            self.load_config()?,
            self.load_caps()?,
            self.load_policy()?,
            self.load_classes()?,
            self.load_weapons()?,
            self.load_spells()?,
        )
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Cross-checks loaded tables and bundles them.
///
/// A class whose levels cannot be requested at all is an error. A class
/// whose stat total disagrees with its starting level only logs a warning;
/// the allocator still never lowers its stats.
pub(crate) fn assemble(
    config: PlannerConfig,
    caps: StatCaps,
    policy: PolicyTable,
    classes: Vec<StartingClass>,
    weapons: Vec<Weapon>,
    spells: Vec<Spell>,
) -> LoadResult<ContentStore> {
    for class in &classes {
        if class.level_range(config.max_level).is_empty() {
            anyhow::bail!(
                "Starting class '{}' begins at level {}, above the maximum level {}",
                class.key,
                class.starting_level,
                config.max_level
            );
        }

        let expected = config.target_stat_sum(class.starting_level);
        if class.stats.sum() != expected {
            tracing::warn!(
                "Starting class '{}' has stat total {} at level {} (expected {})",
                class.key,
                class.stats.sum(),
                class.starting_level,
                expected
            );
        }
    }

    tracing::debug!(
        "Loaded {} classes, {} weapons, {} spells",
        classes.len(),
        weapons.len(),
        spells.len()
    );

    Ok(ContentStore {
        config,
        caps,
        policy,
        classes,
        weapons,
        spells,
    })
}
