//! In-memory passcode store
//!
//! Holds at most one record per email in a map guarded by an async `RwLock`.
//! Every read-modify-write happens under a single write guard, and no I/O is
//! performed while the guard is held.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use otp_core::domain::entities::OtpRecord;
use otp_core::domain::value_objects::{SubmittedCode, ValidationOutcome};
use otp_core::services::OtpStoreTrait;

/// Email-keyed passcode store shared through `Arc`
#[derive(Clone, Default)]
pub struct InMemoryOtpStore {
    records: Arc<RwLock<HashMap<String, OtpRecord>>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for an email, if any
    pub async fn get(&self, email: &str) -> Option<OtpRecord> {
        self.records.read().await.get(email).cloned()
    }
}

#[async_trait]
impl OtpStoreTrait for InMemoryOtpStore {
    async fn insert(&self, email: &str, record: OtpRecord) -> Result<(), String> {
        let replaced = self
            .records
            .write()
            .await
            .insert(email.to_string(), record)
            .is_some();

        if replaced {
            debug!("Replaced previous passcode record");
        }
        Ok(())
    }

    async fn consume(
        &self,
        email: &str,
        code: SubmittedCode<'_>,
        now: DateTime<Utc>,
    ) -> Result<ValidationOutcome, String> {
        let mut records = self.records.write().await;

        let outcome = records
            .get(email)
            .map_or(ValidationOutcome::NotFound, |record| record.check(code, now));

        if outcome.consumes_record() {
            records.remove(email);
        }

        Ok(outcome)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        Ok(before - records.len())
    }

    async fn len(&self) -> Result<usize, String> {
        Ok(self.records.read().await.len())
    }
}
