//! Domain-specific error types and error handling.

use thiserror::Error;

use crate::domain::value_objects::ValidationOutcome;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing (caller's fault)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// No passcode is stored for the email
    #[error("OTP not found")]
    NotFound,

    /// The stored passcode outlived its expiry
    #[error("OTP expired")]
    Expired,

    /// The submitted passcode differs from the stored one
    #[error("Invalid OTP")]
    Mismatch,

    /// The passcode email could not be delivered
    #[error("Notification failed: {message}")]
    Notification { message: String },

    /// The OTP store failed
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Maps a failed validation outcome to its error, `None` for `Valid`
    pub fn from_outcome(outcome: ValidationOutcome) -> Option<Self> {
        match outcome {
            ValidationOutcome::NotFound => Some(DomainError::NotFound),
            ValidationOutcome::Expired => Some(DomainError::Expired),
            ValidationOutcome::Mismatch => Some(DomainError::Mismatch),
            ValidationOutcome::Valid => None,
        }
    }

    /// Whether the error is the caller's doing rather than a server fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::Validation { .. }
                | DomainError::NotFound
                | DomainError::Expired
                | DomainError::Mismatch
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
