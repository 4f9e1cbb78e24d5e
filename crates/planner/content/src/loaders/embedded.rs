//! Content shipped with the crate.

use crate::loaders::factory::assemble;
use crate::loaders::{CapsLoader, CatalogLoader, ConfigLoader, LoadResult, PolicyLoader};
use crate::store::ContentStore;

const CONFIG: &str = include_str!("../../data/config.toml");
const STAT_CAPS: &str = include_str!("../../data/stat_caps.ron");
const POLICY: &str = include_str!("../../data/policy.ron");
const CLASSES: &str = include_str!("../../data/classes.ron");
const WEAPONS: &str = include_str!("../../data/weapons.ron");
const SPELLS: &str = include_str!("../../data/spells.ron");

/// Builds a store from the data files compiled into this crate.
pub fn load_embedded() -> LoadResult<ContentStore> {
    assemble(
        ConfigLoader::parse(CONFIG, "config.toml")?,
        CapsLoader::parse(STAT_CAPS, "stat_caps.ron")?,
        PolicyLoader::parse(POLICY, "policy.ron")?,
        CatalogLoader::parse_classes(CLASSES, "classes.ron")?,
        CatalogLoader::parse_weapons(WEAPONS, "weapons.ron")?,
        CatalogLoader::parse_spells(SPELLS, "spells.ron")?,
    )
}
