//! Mapping from domain and payload errors to HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use otp_core::errors::DomainError;
use otp_shared::types::StatusResponse;

/// Convert a domain error into the `{status, message, error?}` envelope
///
/// Rejected passcodes are ordinary client errors. Delivery failures carry
/// the provider detail in `error`.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(StatusResponse::failed(message.as_str()))
        }
        DomainError::NotFound | DomainError::Expired | DomainError::Mismatch => {
            HttpResponse::BadRequest().json(StatusResponse::failed(error.to_string()))
        }
        DomainError::Notification { message } => HttpResponse::InternalServerError()
            .json(StatusResponse::failed("Email sending failed").with_error(message.as_str())),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(StatusResponse::failed("Internal server error"))
        }
    }
}

/// Body extractor error handler producing the JSON envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected payload on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(StatusResponse::failed("Invalid JSON payload"));
    InternalError::from_response(err, response).into()
}
