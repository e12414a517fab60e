//! Error types for projections and input loading

use thiserror::Error;

/// Errors raised by the projection engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// An input failed its constraint; no series is produced
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the input field that was rejected
    pub fn field(&self) -> &'static str {
        match self {
            ProjectionError::InvalidInput { field, .. } => field,
        }
    }
}

/// A compounding frequency label or period count outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown compounding frequency '{0}' (expected annually, semi-annually, quarterly, monthly, daily or 1, 2, 4, 12, 365)")]
pub struct UnknownFrequency(pub String);

/// Errors raised while loading scenario inputs from CSV
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed scenario row: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unknown compounding frequency '{value}'")]
    Frequency { row: usize, value: String },
}

/// Result alias for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;
