//! Mock Mail Service Implementation
//!
//! Logs messages instead of delivering them. Used when `MAIL_PROVIDER=mock`
//! and as the fallback when the SMTP transport cannot be built.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use otp_shared::utils::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// A message accepted by [`MockMailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub message_id: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Mock mail service for development and testing
///
/// This implementation:
/// - Logs each message with the recipient masked
/// - Optionally prints the full message to the console
/// - Keeps an outbox and a send counter for tests
/// - Can simulate delivery failure
#[derive(Clone)]
pub struct MockMailService {
    message_count: Arc<AtomicU64>,
    outbox: Arc<Mutex<Vec<OutgoingMail>>>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockMailService {
    /// Create a new mock mail service that prints to the console
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            outbox: Arc::new(Mutex::new(Vec::new())),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Latest message sent to `to`
    pub fn last_mail_to(&self, to: &str) -> Option<OutgoingMail> {
        self.outbox
            .lock()
            .ok()?
            .iter()
            .rev()
            .find(|mail| mail.to == to)
            .cloned()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);

        if self.simulate_failure {
            warn!(provider = "mock", to = %masked, "Mock mail service simulating failure");
            return Err(InfrastructureError::Mail(
                "Simulated mail delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Body: {}", html_body);
            println!("{}\n", "=".repeat(60));
        }

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(OutgoingMail {
                message_id: message_id.clone(),
                to: to.to_string(),
                subject: subject.to_string(),
                html_body: html_body.to_string(),
            });
        }

        info!(
            target: "mail_service",
            provider = "mock",
            to = %masked,
            message_id = %message_id,
            "Mail sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn verify(&self) -> Result<(), InfrastructureError> {
        if self.simulate_failure {
            Err(InfrastructureError::Mail(
                "Mock mail service is simulating failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
