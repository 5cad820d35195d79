//! Configuration for the OTP service

use chrono::Duration;
use otp_shared::config::otp::DEFAULT_EXPIRY_MINUTES;
use otp_shared::config::OtpConfig;

/// Subject line of the passcode email
pub const DEFAULT_EMAIL_SUBJECT: &str = "Your OTP Code";

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before a passcode expires
    pub code_expiration_minutes: i64,
    /// Subject line of the passcode email
    pub email_subject: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRY_MINUTES,
            email_subject: DEFAULT_EMAIL_SUBJECT.to_string(),
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            code_expiration_minutes: config.expiry_minutes,
            ..Default::default()
        }
    }
}

impl OtpServiceConfig {
    /// Lifetime of an issued passcode
    ///
    /// A minute count too large for `Duration` saturates at `Duration::MAX`.
    pub fn ttl(&self) -> Duration {
        Duration::try_minutes(self.code_expiration_minutes).unwrap_or(Duration::MAX)
    }

    /// HTML body of the passcode email
    pub fn render_body(&self, code: &str) -> String {
        format!(
            "<h2>Your OTP is {}</h2><p>Expires in {} minutes</p>",
            code, self.code_expiration_minutes
        )
    }
}
