//! Class, weapon and spell catalog loaders.

use std::collections::HashSet;
use std::path::Path;

use planner_core::{Spell, StartingClass, Weapon};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Starting class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<StartingClass>,
}

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<Weapon>,
}

/// Spell catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<Spell>,
}

/// Loader for the catalog files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load_classes(path: &Path) -> LoadResult<Vec<StartingClass>> {
        let content = read_file(path)?;
        Self::parse_classes(&content, &path.display().to_string())
    }

    /// Parses a class catalog. Class keys must be unique ignoring case.
    pub fn parse_classes(content: &str, origin: &str) -> LoadResult<Vec<StartingClass>> {
        let catalog: ClassCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON at {}: {}", origin, e))?;

        let mut seen = HashSet::new();
        for class in &catalog.classes {
            if !seen.insert(class.key.to_ascii_lowercase()) {
                anyhow::bail!("Duplicate starting class '{}' in {}", class.key, origin);
            }
        }

        Ok(catalog.classes)
    }

    pub fn load_weapons(path: &Path) -> LoadResult<Vec<Weapon>> {
        let content = read_file(path)?;
        Self::parse_weapons(&content, &path.display().to_string())
    }

    pub fn parse_weapons(content: &str, origin: &str) -> LoadResult<Vec<Weapon>> {
        let catalog: WeaponCatalog = ron::from_str(content).map_err(|e| {
            anyhow::anyhow!("Failed to parse weapon catalog RON at {}: {}", origin, e)
        })?;

        Ok(catalog.weapons)
    }

    pub fn load_spells(path: &Path) -> LoadResult<Vec<Spell>> {
        let content = read_file(path)?;
        Self::parse_spells(&content, &path.display().to_string())
    }

    pub fn parse_spells(content: &str, origin: &str) -> LoadResult<Vec<Spell>> {
        let catalog: SpellCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON at {}: {}", origin, e))?;

        Ok(catalog.spells)
    }
}
