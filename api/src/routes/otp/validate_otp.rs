use actix_web::{web, HttpResponse};

use otp_core::services::{NotifierTrait, OtpStoreTrait};
use otp_shared::types::StatusResponse;
use otp_shared::utils::mask_email;

use super::AppState;
use crate::dto::{ValidateOtpRequest, ValidateOtpResponse};
use crate::handlers::domain_error_response;

/// Handler for POST /api/validate-otp
///
/// A correct, unexpired passcode is consumed and a fresh identity is
/// returned. Every other outcome is a 400 with the reason in `message`.
pub async fn validate_otp<N, S>(
    state: web::Data<AppState<N, S>>,
    request: web::Json<ValidateOtpRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    let (email, code) = match (request.email_key(), request.submitted_code()) {
        (Some(email), Some(code)) => (email, code),
        _ => {
            log::warn!("Rejected validate-otp request with missing fields");
            return HttpResponse::BadRequest()
                .json(StatusResponse::failed("Email and OTP required"));
        }
    };

    match state.otp_service.verify_submission(&email, code).await {
        Ok(user) => {
            log::info!("Passcode accepted for {}", mask_email(&email));
            HttpResponse::Ok().json(ValidateOtpResponse::from(user))
        }
        Err(error) => {
            log::warn!("Passcode rejected for {}: {}", mask_email(&email), error);
            domain_error_response(&error)
        }
    }
}
