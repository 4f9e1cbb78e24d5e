//! Oracle access errors.
//!
//! Errors related to oracle availability and data access.

use crate::error::{ErrorSeverity, PlannerError};

/// Errors that occur when accessing Oracle data.
///
/// A missing oracle is fatal: the allocator cannot run without caps or policy.
/// An unknown lookup key is a caller mistake.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CapsOracle is not available in the environment.
    #[error("CapsOracle not available")]
    CapsNotAvailable,

    /// PolicyOracle is not available in the environment.
    #[error("PolicyOracle not available")]
    PolicyNotAvailable,

    /// CatalogOracle is not available in the environment.
    #[error("CatalogOracle not available")]
    CatalogNotAvailable,

    /// Starting class was not found by key.
    #[error("starting class '{0}' not found")]
    StartingClassNotFound(String),
}

impl PlannerError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            CapsNotAvailable | PolicyNotAvailable | CatalogNotAvailable => ErrorSeverity::Fatal,
            StartingClassNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CapsNotAvailable => "ORACLE_CAPS_NOT_AVAILABLE",
            PolicyNotAvailable => "ORACLE_POLICY_NOT_AVAILABLE",
            CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
            StartingClassNotFound(_) => "ORACLE_STARTING_CLASS_NOT_FOUND",
        }
    }
}
