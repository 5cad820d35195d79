//! Cache module for passcode storage
//!
//! Provides the in-memory store backing the OTP service and the background
//! sweeper that purges expired records.

pub mod otp_store;
pub mod sweeper;

#[cfg(test)]
mod tests;

pub use otp_store::InMemoryOtpStore;
pub use sweeper::OtpSweeper;
