//! Passcode lifetime configuration

use serde::{Deserialize, Serialize};

use super::parse_or;

/// Default lifetime of an issued passcode
pub const DEFAULT_EXPIRY_MINUTES: i64 = 5;

/// Longest accepted passcode lifetime (one day)
pub const MAX_EXPIRY_MINUTES: i64 = 24 * 60;

/// Default interval between expired-record sweeps
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Passcode configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes a passcode stays valid after issuance
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,

    /// Seconds between sweeps of expired records (0 disables the sweeper)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl OtpConfig {
    /// Create from a variable lookup (`OTP_EXPIRY_MINUTES`, `OTP_SWEEP_INTERVAL_SECS`)
    ///
    /// An expiry outside `1..=MAX_EXPIRY_MINUTES` falls back to the default.
    pub fn from_source<F>(get: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let expiry_minutes = parse_or(get, "OTP_EXPIRY_MINUTES", DEFAULT_EXPIRY_MINUTES);
        Self {
            expiry_minutes: if (1..=MAX_EXPIRY_MINUTES).contains(&expiry_minutes) {
                expiry_minutes
            } else {
                DEFAULT_EXPIRY_MINUTES
            },
            sweep_interval_secs: parse_or(
                get,
                "OTP_SWEEP_INTERVAL_SECS",
                DEFAULT_SWEEP_INTERVAL_SECS,
            ),
        }
    }
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_EXPIRY_MINUTES
}

fn default_sweep_interval_secs() -> u64 {
    DEFAULT_SWEEP_INTERVAL_SECS
}
