//! # Infrastructure Layer
//!
//! Concrete implementations of the capabilities the OTP core depends on.
//!
//! ## Architecture
//!
//! - **Cache**: in-memory passcode store and the periodic expiry sweeper
//! - **Mail**: SMTP delivery through `lettre` plus a mock mailer for development

// Re-export core types for convenience
pub use otp_core::errors::*;

/// Cache module - in-memory passcode store and sweeper
pub mod cache;

/// Mail module - outgoing email providers
pub mod mail;

pub use cache::{InMemoryOtpStore, OtpSweeper};
pub use mail::{create_mail_service, MailNotifier, MailService, MockMailService, SmtpMailService};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<lettre::transport::smtp::Error> for InfrastructureError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        InfrastructureError::Mail(err.to_string())
    }
}

impl From<lettre::error::Error> for InfrastructureError {
    fn from(err: lettre::error::Error) -> Self {
        InfrastructureError::Mail(err.to_string())
    }
}

impl From<lettre::address::AddressError> for InfrastructureError {
    fn from(err: lettre::address::AddressError) -> Self {
        InfrastructureError::Mail(format!("Invalid address: {}", err))
    }
}
