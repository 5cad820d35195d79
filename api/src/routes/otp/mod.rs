//! Passcode route handlers
//!
//! - `POST /api/generate-otp` issues and emails a passcode
//! - `POST /api/validate-otp` checks and consumes a passcode

pub mod generate_otp;
pub mod validate_otp;

use std::sync::Arc;

use otp_core::services::{NotifierTrait, OtpService, OtpStoreTrait};

/// Application state that holds shared services
pub struct AppState<N, S>
where
    N: NotifierTrait,
    S: OtpStoreTrait,
{
    pub otp_service: Arc<OtpService<N, S>>,
}

impl<N: NotifierTrait, S: OtpStoreTrait> AppState<N, S> {
    pub fn new(otp_service: Arc<OtpService<N, S>>) -> Self {
        Self { otp_service }
    }
}
