//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome marker carried in the `status` field of every response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Status envelope: `{status, message, error?}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the request succeeded
    pub status: ResponseStatus,

    /// Human-readable message
    pub message: String,

    /// Underlying failure detail, when one is available
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl StatusResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            error: None,
        }
    }

    /// Create a failed response
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failed,
            message: message.into(),
            error: None,
        }
    }

    /// Attach the underlying failure detail
    pub fn with_error(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Healthy response for the named service
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: String::from("healthy"),
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
