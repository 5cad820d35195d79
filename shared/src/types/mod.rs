//! Type definitions shared by every JSON endpoint
//!
//! - `response` - status envelope and health check payloads

pub mod response;

// Re-export commonly used types at module level
pub use response::{HealthResponse, ResponseStatus, StatusResponse};
