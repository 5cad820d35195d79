use actix_web::{web, HttpResponse};
use validator::Validate;

use otp_core::services::{NotifierTrait, OtpStoreTrait};
use otp_shared::types::StatusResponse;
use otp_shared::utils::mask_email;

use super::AppState;
use crate::dto::GenerateOtpRequest;
use crate::handlers::domain_error_response;

/// Handler for POST /api/generate-otp
///
/// # Request Body
///
/// ```json
/// { "email": "alice@test.com" }
/// ```
///
/// # Response
///
/// - 200 `{"status":"Success","message":"OTP sent successfully"}`
/// - 400 `{"status":"Failed","message":"Email is required"}`
/// - 500 `{"status":"Failed","message":"Email sending failed","error":"..."}`
pub async fn generate_otp<N, S>(
    state: web::Data<AppState<N, S>>,
    request: web::Json<GenerateOtpRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    S: OtpStoreTrait + 'static,
{
    if request.validate().is_err() {
        log::warn!("Rejected generate-otp request without email");
        return HttpResponse::BadRequest().json(StatusResponse::failed("Email is required"));
    }

    let email = request.email.as_deref().unwrap_or_default();
    log::info!("Processing generate-otp request for {}", mask_email(email));

    match state.otp_service.issue_otp(email).await {
        Ok(result) => {
            log::info!(
                "Passcode sent to {}, message_id: {}",
                mask_email(email),
                result.message_id
            );
            HttpResponse::Ok().json(StatusResponse::success("OTP sent successfully"))
        }
        Err(error) => {
            log::error!("Failed to issue passcode for {}: {}", mask_email(email), error);
            domain_error_response(&error)
        }
    }
}
