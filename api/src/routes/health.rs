use actix_web::HttpResponse;
use otp_shared::types::HealthResponse;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "mailpass-otp-api";

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
