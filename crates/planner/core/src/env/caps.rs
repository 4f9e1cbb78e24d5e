use crate::stats::StatCaps;

/// Oracle providing the soft/hard cap table.
pub trait CapsOracle: Send + Sync {
    fn stat_caps(&self) -> StatCaps;
}
