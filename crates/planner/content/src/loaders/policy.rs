//! Allocation policy loader.

use std::path::Path;

use planner_core::{Playstyle, Priority};

use crate::loaders::{LoadResult, read_file};
use crate::policy::{PolicySpec, PolicyTable};

/// Loader for `policy.ron`.
///
/// Playstyles or priorities missing from the file are logged; requests for
/// them fail at allocation time with a configuration error.
pub struct PolicyLoader;

impl PolicyLoader {
    pub fn load(path: &Path) -> LoadResult<PolicyTable> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn parse(content: &str, origin: &str) -> LoadResult<PolicyTable> {
        let spec: PolicySpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse policy RON at {}: {}", origin, e))?;

        let table = PolicyTable::from_spec(spec);

        for priority in Priority::all() {
            if !table.has_priority(priority) {
                tracing::warn!("Policy at {} has no entry for priority '{}'", origin, priority);
            }
        }
        for playstyle in Playstyle::all() {
            if !table.has_playstyle(playstyle) {
                tracing::warn!(
                    "Policy at {} has no entry for playstyle '{}'",
                    origin,
                    playstyle
                );
            }
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{Stat, Weight};

    const MINIMAL: &str = r#"
        PolicySpec(
            base_weights: [(Vigor, 0.8), (Adaptability, 0.9)],
            priorities: [
                (priority: Evasion, adjustments: [(Vigor, -0.6), (Adaptability, 0.8)]),
            ],
            playstyles: [
                (playstyle: Mage, minimums: [(Intelligence, 10)], weights: [(Intelligence, 1.5)]),
            ],
        )
    "#;

    #[test]
    fn parses_decimal_weights_exactly() {
        let table = PolicyLoader::parse(MINIMAL, "inline").unwrap();
        let profile = table.profile(Playstyle::Mage, Priority::Evasion).unwrap();

        assert_eq!(profile.weights.get(Stat::Vigor), Weight::from_hundredths(20));
        assert_eq!(profile.weights.get(Stat::Adaptability), Weight::from_hundredths(170));
        assert_eq!(profile.weights.get(Stat::Intelligence), Weight::from_hundredths(150));
        assert_eq!(profile.minimum(Stat::Intelligence), Some(10));
    }

    #[test]
    fn malformed_policy_names_its_origin() {
        let err = PolicyLoader::parse("PolicySpec(", "policy.ron").unwrap_err();

        assert!(err.to_string().contains("policy.ron"));
    }
}
