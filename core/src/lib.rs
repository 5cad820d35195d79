//! # MailPass Core
//!
//! Core business logic and domain layer for the MailPass backend.
//! This crate contains the passcode record entity, validation outcomes,
//! the OTP service, the capability traits it depends on, and error types.

pub mod domain;
pub mod services;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use errors::*;
