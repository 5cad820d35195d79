//! Mock implementations for testing code that depends on the OTP service

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

use crate::domain::entities::{OtpRecord, CODE_LENGTH};
use crate::domain::value_objects::{SubmittedCode, ValidationOutcome};

use super::clock::Clock;
use super::traits::{NotifierTrait, OtpStoreTrait};

/// A message captured by [`MockNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Notifier that records messages instead of sending them
#[derive(Clone, Default)]
pub struct MockNotifier {
    pub sent_messages: Arc<Mutex<Vec<SentMessage>>>,
    pub should_fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }

    pub fn last_message_to(&self, to: &str) -> Option<SentMessage> {
        self.sent_messages
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|message| message.to == to)
            .cloned()
    }

    /// The passcode carried by the latest message to `to`
    pub fn last_code_for(&self, to: &str) -> Option<String> {
        self.last_message_to(to).and_then(|message| {
            message
                .body
                .split(|c: char| !c.is_ascii_digit())
                .find(|digits| digits.len() == CODE_LENGTH)
                .map(String::from)
        })
    }
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("Mail service error".to_string());
        }
        self.sent_messages.lock().unwrap().push(SentMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}

/// Store backed by a plain map, with optional failure injection
#[derive(Clone, Default)]
pub struct MockOtpStore {
    pub records: Arc<RwLock<HashMap<String, OtpRecord>>>,
    pub should_fail: bool,
}

impl MockOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub async fn get(&self, email: &str) -> Option<OtpRecord> {
        self.records.read().await.get(email).cloned()
    }

    fn check_failure(&self) -> Result<(), String> {
        if self.should_fail {
            Err("Store error".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OtpStoreTrait for MockOtpStore {
    async fn insert(&self, email: &str, record: OtpRecord) -> Result<(), String> {
        self.check_failure()?;
        self.records.write().await.insert(email.to_string(), record);
        Ok(())
    }

    async fn consume(
        &self,
        email: &str,
        code: SubmittedCode<'_>,
        now: DateTime<Utc>,
    ) -> Result<ValidationOutcome, String> {
        self.check_failure()?;
        let mut records = self.records.write().await;
        let outcome = match records.get(email) {
            Some(record) => record.check(code, now),
            None => ValidationOutcome::NotFound,
        };
        if outcome.consumes_record() {
            records.remove(email);
        }
        Ok(outcome)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String> {
        self.check_failure()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        Ok(before - records.len())
    }

    async fn len(&self) -> Result<usize, String> {
        self.check_failure()?;
        Ok(self.records.read().await.len())
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
