//! Allocation errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, PlannerError};
use crate::policy::{Playstyle, Priority};

/// The policy tables cannot drive an allocation for this request.
///
/// Raised before any point is spent; the allocator never falls back to an
/// empty or default policy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The policy oracle has no profile for the pair.
    #[error("no requirement profile for playstyle '{playstyle}' with priority '{priority}'")]
    MissingProfile {
        playstyle: Playstyle,
        priority: Priority,
    },

    /// Every weight in the profile is zero or negative, so weighted
    /// distribution could never converge on the target sum.
    #[error("requirement profile has no positive stat weight")]
    NoPositiveWeights,
}

impl PlannerError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingProfile { .. } => "CONFIG_MISSING_PROFILE",
            Self::NoPositiveWeights => "CONFIG_NO_POSITIVE_WEIGHTS",
        }
    }
}

/// Errors returned by [`StatAllocator`](super::StatAllocator).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl PlannerError for AllocationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration(e) => e.severity(),
            Self::Oracle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(e) => e.error_code(),
            Self::Oracle(e) => e.error_code(),
        }
    }
}
