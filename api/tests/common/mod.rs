#![allow(dead_code)]

use actix_web::web;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

use otp_api::routes::otp::AppState;
use otp_core::services::otp::mock::{ManualClock, MockNotifier};
use otp_core::services::{OtpService, OtpServiceConfig};
use otp_infra::InMemoryOtpStore;

pub type TestState = AppState<MockNotifier, InMemoryOtpStore>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub notifier: Arc<MockNotifier>,
    pub store: Arc<InMemoryOtpStore>,
    pub clock: Arc<ManualClock>,
}

/// Helper function to create test application state
pub fn create_test_context() -> TestContext {
    create_test_context_with(MockNotifier::new())
}

pub fn create_test_context_with(notifier: MockNotifier) -> TestContext {
    let notifier = Arc::new(notifier);
    let store = Arc::new(InMemoryOtpStore::new());
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    ));

    let otp_service = Arc::new(OtpService::with_clock(
        notifier.clone(),
        store.clone(),
        OtpServiceConfig::default(),
        clock.clone(),
    ));

    TestContext {
        state: web::Data::new(AppState::new(otp_service)),
        notifier,
        store,
        clock,
    }
}
