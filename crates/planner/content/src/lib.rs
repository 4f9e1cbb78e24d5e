//! Data-driven planner content and loaders.
//!
//! This crate houses the static game data the planner runs on and provides
//! loaders for the RON/TOML files that describe it:
//! - Starting classes, weapons and spells (RON)
//! - Soft/hard stat caps (RON)
//! - Allocation policy per playstyle and priority (RON)
//! - Planner configuration (TOML)
//!
//! The shipped files under `data/` are embedded at compile time, so a
//! [`ContentStore`] can be built without touching the filesystem. A data
//! directory with the same layout can be loaded instead through
//! [`ContentFactory`].

pub mod policy;
pub mod store;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use policy::{PlaystyleRule, PolicySpec, PolicyTable, PriorityAdjustment};
pub use store::ContentStore;

#[cfg(feature = "loaders")]
pub use loaders::{
    CapsLoader, CatalogLoader, ConfigLoader, ContentFactory, LoadResult, PolicyLoader,
    load_embedded,
};
