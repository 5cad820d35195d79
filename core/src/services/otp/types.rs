//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of issuing a passcode
#[derive(Debug, Clone)]
pub struct IssueOtpResult {
    /// The generated passcode
    pub code: String,
    /// When the passcode stops validating
    pub expires_at: DateTime<Utc>,
    /// The message id reported by the notifier
    pub message_id: String,
}
