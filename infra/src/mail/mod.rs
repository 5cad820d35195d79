//! Mail Service Module
//!
//! Outgoing email for passcode delivery.
//!
//! ## Features
//!
//! - **Mail Service Trait**: common interface for all providers
//! - **SMTP**: authenticated relay through `lettre`
//! - **Mock**: console output for development
//! - **Notifier Adapter**: plugs a provider into the core OTP service

use std::sync::Arc;

use otp_shared::config::{MailConfig, MailProvider};

pub mod mail_service;
pub mod mock_mail;
pub mod notifier_adapter;
pub mod smtp;

pub use mail_service::MailService;
pub use mock_mail::{MockMailService, OutgoingMail};
pub use notifier_adapter::MailNotifier;
pub use smtp::SmtpMailService;


/// Create a mail service based on configuration
///
/// An SMTP transport that cannot be built falls back to the mock service.
pub fn create_mail_service(config: &MailConfig) -> Arc<dyn MailService> {
    match config.provider {
        MailProvider::Mock => Arc::new(MockMailService::new()),
        MailProvider::Smtp => match SmtpMailService::new(config) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize SMTP mail service: {}", e);
                tracing::warn!("Falling back to mock mail service");
                Arc::new(MockMailService::new())
            }
        },
    }
}

/// Verify the provider connection and log the result
///
/// Never fails: an unreachable provider is reported and startup continues.
pub async fn log_transport_status(service: &dyn MailService) -> bool {
    match service.verify().await {
        Ok(()) => {
            tracing::info!(provider = service.provider_name(), "Mail transporter is ready");
            true
        }
        Err(e) => {
            tracing::error!(
                provider = service.provider_name(),
                error = %e,
                "Mail transporter verification failed"
            );
            false
        }
    }
}
