//! Content loaders for reading planner data from files.
//!
//! Every loader has a `load` that reads a path and a `parse` that works on
//! text already in memory; the embedded tables go through `parse` with the
//! file name as origin.

pub mod caps;
pub mod catalog;
pub mod config;
pub mod embedded;
pub mod factory;
pub mod policy;

pub use caps::CapsLoader;
pub use catalog::{CatalogLoader, ClassCatalog, SpellCatalog, WeaponCatalog};
pub use config::ConfigLoader;
pub use embedded::load_embedded;
pub use factory::ContentFactory;
pub use policy::PolicyLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
