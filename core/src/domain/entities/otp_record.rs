//! One-time passcode record for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SubmittedCode, ValidationOutcome};

/// Length of the passcode
pub const CODE_LENGTH: usize = 6;

/// Smallest passcode value (codes never start with zero)
pub const MIN_CODE: u32 = 100_000;

/// Largest passcode value
pub const MAX_CODE: u32 = 999_999;

/// Stored passcode, keyed by email address in the OTP store
///
/// `expires_at` is fixed at issuance and never extended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The 6-digit passcode
    pub code: String,

    /// Timestamp when the passcode was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the passcode no longer validates
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record for an existing code
    ///
    /// # Arguments
    ///
    /// * `code` - The passcode to store
    /// * `issued_at` - Issuance timestamp
    /// * `ttl` - Lifetime of the passcode
    ///
    /// A lifetime reaching past the representable range saturates at the
    /// latest representable instant.
    pub fn new(code: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            code: code.into(),
            created_at: issued_at,
            expires_at: issued_at
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Creates a record holding a freshly generated passcode
    pub fn generate(issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(Self::generate_code(), issued_at, ttl)
    }

    /// Generates a cryptographically secure random 6-digit code
    ///
    /// Uses OsRng (OS-provided CSPRNG) and draws uniformly from
    /// `MIN_CODE..=MAX_CODE`.
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(MIN_CODE..=MAX_CODE);
        code.to_string()
    }

    /// Checks if the passcode has expired at `now`
    ///
    /// Expiry is strict: the record is still live at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a submitted code in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Classifies a validation attempt against this record
    ///
    /// Expiry is checked before the code, so an expired record reports
    /// `Expired` even for the correct code. A non-text submission never
    /// matches.
    pub fn check(&self, submitted: SubmittedCode<'_>, now: DateTime<Utc>) -> ValidationOutcome {
        if self.is_expired_at(now) {
            return ValidationOutcome::Expired;
        }
        match submitted {
            SubmittedCode::Text(code) if self.matches(code) => ValidationOutcome::Valid,
            _ => ValidationOutcome::Mismatch,
        }
    }
}
