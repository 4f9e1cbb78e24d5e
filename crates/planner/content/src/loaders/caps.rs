//! Stat cap table loader.

use std::path::Path;

use planner_core::{Stat, StatCapPair, StatCaps};

use crate::loaders::{LoadResult, read_file};

/// Loader for the soft/hard cap table.
///
/// File format: `Vec<(Stat, StatCapPair)>`
///
/// ```ron
/// [
///     (Vigor, (soft: 30, hard: 50)),
///     (Adaptability, (soft: 20, hard: 39)),
/// ]
/// ```
pub struct CapsLoader;

impl CapsLoader {
    pub fn load(path: &Path) -> LoadResult<StatCaps> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn parse(content: &str, origin: &str) -> LoadResult<StatCaps> {
        let pairs: Vec<(Stat, StatCapPair)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stat caps RON at {}: {}", origin, e))?;

        for (stat, pair) in &pairs {
            if pair.soft > pair.hard {
                anyhow::bail!(
                    "Invalid caps for {} in {}: soft cap {} exceeds hard cap {}",
                    stat,
                    origin,
                    pair.soft,
                    pair.hard
                );
            }
        }

        Ok(StatCaps::from_pairs(&pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_stats_use_default_caps() {
        let caps = CapsLoader::parse("[(Faith, (soft: 40, hard: 50))]", "inline").unwrap();

        assert_eq!(caps.get(Stat::Faith), StatCapPair::new(40, 50));
        assert_eq!(caps.get(Stat::Vigor), StatCapPair::DEFAULT);
    }

    #[test]
    fn inverted_caps_are_rejected() {
        let err = CapsLoader::parse("[(Vigor, (soft: 50, hard: 30))]", "inline").unwrap_err();

        assert!(err.to_string().contains("vigor"));
    }
}
