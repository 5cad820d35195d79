//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or, string_or};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: default_port(),
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create from a variable lookup (`HOST`, `PORT`, `SERVER_WORKERS`, `MAX_PAYLOAD_SIZE`)
    pub fn from_source<F>(get: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: string_or(get, "HOST", "0.0.0.0"),
            port: parse_or(get, "PORT", default_port()),
            workers: parse_or(get, "SERVER_WORKERS", 0),
            max_payload_size: parse_or(get, "MAX_PAYLOAD_SIZE", default_max_payload_size()),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
///
/// An empty origin list allows any origin.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create from a variable lookup (`CORS_ALLOWED_ORIGINS`, `CORS_MAX_AGE`)
    pub fn from_source<F>(get: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim())
                    .filter(|origin| !origin.is_empty() && *origin != "*")
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            allowed_origins,
            max_age: parse_or(get, "CORS_MAX_AGE", default_max_age()),
        }
    }

    /// Whether every origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

fn default_port() -> u16 {
    3000
}

fn default_max_payload_size() -> usize {
    64 * 1024  // 64 KB
}

fn default_max_age() -> usize {
    3600
}
