//! CORS middleware configuration for cross-origin requests.
//!
//! Any origin is accepted unless `CORS_ALLOWED_ORIGINS` lists specific ones.

use actix_cors::Cors;
use actix_web::http::Method;

use otp_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_any_header()
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    config.allowed_origins.iter().fold(cors, |cors, origin| {
        log::info!("Adding allowed origin: {}", origin);
        cors.allowed_origin(origin)
    })
}
