//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outgoing mail provider and SMTP credentials
//! - `otp` - Passcode lifetime and expired-record sweeping
//! - `server` - HTTP server and CORS configuration
//!
//! Every section is built from a variable lookup (`from_source`).
//! `AppConfig::from_env` feeds it the process environment; tests pass a map
//! instead of mutating the real environment.

pub mod environment;
pub mod mail;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use otp::OtpConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Outgoing mail configuration
    pub mail: MailConfig,

    /// Passcode configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            mail: MailConfig::default(),
            otp: OtpConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from a variable lookup function
    pub fn from_source<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_source(&get);
        Self {
            environment,
            server: ServerConfig::from_source(&get),
            cors: CorsConfig::from_source(&get),
            mail: MailConfig::from_source(&get),
            otp: OtpConfig::from_source(&get),
            logging: LoggingConfig::from_source(environment, &get),
        }
    }
}

/// Parse a variable, falling back to `default` when unset or malformed
pub(crate) fn parse_or<T, F>(get: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a string variable, treating an empty value as unset
pub(crate) fn string_or<F>(get: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
