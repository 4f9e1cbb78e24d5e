//! Common error infrastructure for planner-core.
//!
//! This module provides shared types and traits used across all error types in the crate.
//! Domain-specific errors (e.g., `ConfigurationError`, `OracleError`) are defined in their
//! respective modules alongside the operations that raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure domain has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Stable Codes**: Every variant exposes a static code for logs and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Configuration**: Policy or data tables are incomplete for the request
/// - **Fatal**: A required collaborator is missing; nothing can be computed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown starting class
    Validation,

    /// Configuration error - the loaded tables cannot serve this request.
    ///
    /// Examples: no requirement profile for a playstyle, profile without weights
    Configuration,

    /// Fatal error - a required oracle is not wired in.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if a different request could succeed with the same tables.
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all planner-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who must act, not on impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
