//! Error Types for Portfolio Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A submitted field is missing, non-numeric or out of its domain.
    /// Raised before any computation runs.
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),

    /// Overflow or another non-representable intermediate result
    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdvisorError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { field, reason } => {
                format!("Please check {}: it {}.", field.replace('_', " "), reason)
            }
            Self::InvalidAllocation(_) => "The allocation weights must add up to 100%.".into(),
            Self::Computation(_) => "Some figures could not be calculated for these inputs.".into(),
            Self::Config(_) => "The advisor is misconfigured.".into(),
        }
    }
}
