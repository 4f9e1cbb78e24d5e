use crate::catalog::{Spell, SpellSchool, StartingClass, Weapon};

/// Oracle providing static catalog data: classes, weapons and spells.
pub trait CatalogOracle: Send + Sync {
    /// All starting classes in display order.
    fn starting_classes(&self) -> &[StartingClass];

    fn weapons(&self) -> &[Weapon];

    /// Spells belonging to `school`, in catalog order.
    fn spells(&self, school: SpellSchool) -> Vec<&Spell>;

    fn starting_class(&self, key: &str) -> Option<&StartingClass> {
        self.starting_classes()
            .iter()
            .find(|class| class.key.eq_ignore_ascii_case(key))
    }
}
