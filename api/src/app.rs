//! Application factory
//!
//! Builds the Actix-web application around shared state so the binary and
//! the HTTP tests serve exactly the same routes and middleware.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use otp_core::services::{NotifierTrait, OtpStoreTrait};
use otp_shared::config::AppConfig;
use otp_shared::types::StatusResponse;

use crate::handlers::json_error_handler;
use crate::middleware::create_cors;
use crate::routes::health::health_check;
use crate::routes::otp::{generate_otp::generate_otp, validate_otp::validate_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<N, S>(
    app_state: web::Data<AppState<N, S>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Last wrap runs first: request logging sees CORS rejections too.
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/generate-otp", web::post().to(generate_otp::<N, S>))
                .route("/validate-otp", web::post().to(validate_otp::<N, S>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(StatusResponse::failed("Not found"))
}
