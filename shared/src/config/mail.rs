//! Outgoing mail configuration

use serde::{Deserialize, Serialize};

use super::string_or;

/// Mail provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Real delivery through an SMTP relay
    #[default]
    Smtp,
    /// Log-only delivery for development and tests
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smtp" => Ok(MailProvider::Smtp),
            "mock" => Ok(MailProvider::Mock),
            _ => Err(format!("Unknown mail provider: {}", s)),
        }
    }
}

impl std::fmt::Display for MailProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MailProvider::Smtp => write!(f, "smtp"),
            MailProvider::Mock => write!(f, "mock"),
        }
    }
}

/// Mail service configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Provider used to deliver passcodes
    #[serde(default)]
    pub provider: MailProvider,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP account user, also used as the sender address
    pub username: String,

    /// SMTP account password
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Display name placed in the From header
    pub from_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Smtp,
            smtp_host: String::from(DEFAULT_SMTP_HOST),
            username: String::new(),
            password: String::new(),
            from_name: String::from(DEFAULT_FROM_NAME),
        }
    }
}

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_FROM_NAME: &str = "Hello Certification";

impl MailConfig {
    /// Create from a variable lookup
    ///
    /// Reads `MAIL_PROVIDER`, `SMTP_HOST`, `EMAIL_USER`, `EMAIL_PASS` and
    /// `MAIL_FROM_NAME`. An unknown provider falls back to SMTP.
    pub fn from_source<F>(get: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            provider: get("MAIL_PROVIDER")
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            smtp_host: string_or(get, "SMTP_HOST", DEFAULT_SMTP_HOST),
            username: get("EMAIL_USER").unwrap_or_default().trim().to_string(),
            password: get("EMAIL_PASS").unwrap_or_default(),
            from_name: string_or(get, "MAIL_FROM_NAME", DEFAULT_FROM_NAME),
        }
    }

    /// Whether SMTP credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("smtp_host", &self.smtp_host)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("from_name", &self.from_name)
            .finish()
    }
}
