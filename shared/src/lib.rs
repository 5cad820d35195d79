//! Shared utilities and common types for the MailPass server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes shared by every JSON endpoint
//! - Utility functions (email masking, presence checks)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    CorsConfig, LoggingConfig, LogFormat, MailConfig, OtpConfig, ServerConfig,
};
pub use types::{ResponseStatus, StatusResponse};
pub use utils::{email, validation};
