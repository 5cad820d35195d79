//! Outcome of a passcode validation attempt and the identity it yields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a single validation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// No record exists for the email
    NotFound,
    /// The record outlived its expiry and was removed
    Expired,
    /// The submitted code differs; the record is kept
    Mismatch,
    /// The code matched and the record was consumed
    Valid,
}

impl ValidationOutcome {
    /// Whether the attempt succeeded
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Whether the store must delete the record after this outcome
    pub fn consumes_record(&self) -> bool {
        matches!(self, ValidationOutcome::Valid | ValidationOutcome::Expired)
    }

    /// Stable name used in structured logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationOutcome::NotFound => "not_found",
            ValidationOutcome::Expired => "expired",
            ValidationOutcome::Mismatch => "mismatch",
            ValidationOutcome::Valid => "valid",
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity returned after a successful validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    /// The verified email address
    pub username: String,
    /// Fresh opaque identifier minted for this verification
    pub userid: Uuid,
    /// Starting credit balance
    pub credit: i64,
}

impl VerifiedUser {
    /// Mints a new identity for a verified email
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            username: email.into(),
            userid: Uuid::new_v4(),
            credit: 0,
        }
    }
}
