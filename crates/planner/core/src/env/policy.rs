use crate::policy::{Playstyle, Priority, RequirementProfile};

/// Oracle providing allocation policy.
///
/// Returns `None` when the loaded tables have no entry for the pair; the
/// allocator turns that into a configuration error instead of guessing.
pub trait PolicyOracle: Send + Sync {
    fn requirement_profile(
        &self,
        playstyle: Playstyle,
        priority: Priority,
    ) -> Option<RequirementProfile>;
}
