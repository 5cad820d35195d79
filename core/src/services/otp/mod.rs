//! OTP service module for email-based verification
//!
//! This module provides the passcode lifecycle:
//! - Code generation and storage with a fixed expiry
//! - Delivery through an injected notifier
//! - One-time validation with consume-on-success and delete-on-expiry
//! - Purging of expired records for the background sweeper

mod clock;
mod config;
mod service;
mod traits;
mod types;

pub mod mock;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{NotifierTrait, OtpStoreTrait};
pub use types::IssueOtpResult;
