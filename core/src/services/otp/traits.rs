//! Traits for notifier and store integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::OtpRecord;
use crate::domain::value_objects::{SubmittedCode, ValidationOutcome};

/// Trait for delivering passcodes to users
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Send a message, returning a provider message id
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;
}

/// Trait for the email-keyed passcode store
///
/// Implementations must make `consume` atomic per email: the lookup, the
/// classification and any deletion happen under one critical section.
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Insert a record, replacing any previous record for the email
    async fn insert(&self, email: &str, record: OtpRecord) -> Result<(), String>;
    /// Classify a validation attempt, deleting the record on `Valid` or `Expired`
    async fn consume(
        &self,
        email: &str,
        code: SubmittedCode<'_>,
        now: DateTime<Utc>,
    ) -> Result<ValidationOutcome, String>;
    /// Remove every record expired at `now`, returning how many were removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String>;
    /// Number of records currently held
    async fn len(&self) -> Result<usize, String>;
}
