//! Unit tests for OTP issuance and validation

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::{MAX_CODE, MIN_CODE};
use crate::domain::value_objects::{SubmittedCode, ValidationOutcome};
use crate::errors::DomainError;
use crate::services::otp::mock::{ManualClock, MockNotifier, MockOtpStore};
use crate::services::otp::{OtpService, OtpServiceConfig};

const EMAIL: &str = "alice@test.com";

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

struct Fixture {
    service: OtpService<MockNotifier, MockOtpStore>,
    notifier: Arc<MockNotifier>,
    store: Arc<MockOtpStore>,
    clock: Arc<ManualClock>,
}

fn fixture_with(notifier: MockNotifier, store: MockOtpStore) -> Fixture {
    let notifier = Arc::new(notifier);
    let store = Arc::new(store);
    let clock = Arc::new(ManualClock::new(start()));
    let service = OtpService::with_clock(
        notifier.clone(),
        store.clone(),
        OtpServiceConfig::default(),
        clock.clone(),
    );
    Fixture {
        service,
        notifier,
        store,
        clock,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockNotifier::new(), MockOtpStore::new())
}

#[tokio::test]
async fn test_issue_otp_stores_and_sends_code() {
    let f = fixture();

    let result = f.service.issue_otp(EMAIL).await.unwrap();

    let num: u32 = result.code.parse().unwrap();
    assert!((MIN_CODE..=MAX_CODE).contains(&num));
    assert_eq!(result.expires_at, start() + Duration::minutes(5));
    assert!(result.message_id.starts_with("mock-msg-"));

    let stored = f.store.get(EMAIL).await.unwrap();
    assert_eq!(stored.code, result.code);
    assert_eq!(stored.expires_at, result.expires_at);

    let message = f.notifier.last_message_to(EMAIL).unwrap();
    assert_eq!(message.subject, "Your OTP Code");
    assert_eq!(
        message.body,
        format!("<h2>Your OTP is {}</h2><p>Expires in 5 minutes</p>", result.code)
    );
    assert_eq!(f.notifier.last_code_for(EMAIL), Some(result.code));
}

#[tokio::test]
async fn test_issue_otp_rejects_empty_email() {
    let f = fixture();

    let err = f.service.issue_otp("").await.unwrap_err();
    assert_eq!(
        err,
        DomainError::Validation {
            message: "Email is required".to_string()
        }
    );
    assert_eq!(f.notifier.sent_count(), 0);
    assert_eq!(f.service.stored_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_issue_otp_notification_failure_keeps_record() {
    let f = fixture_with(MockNotifier::failing(), MockOtpStore::new());

    let err = f.service.issue_otp(EMAIL).await.unwrap_err();
    match err {
        DomainError::Notification { message } => assert_eq!(message, "Mail service error"),
        other => panic!("Expected notification error, got {:?}", other),
    }

    assert!(f.store.get(EMAIL).await.is_some());
}

#[tokio::test]
async fn test_issue_otp_store_failure_is_internal() {
    let f = fixture_with(MockNotifier::new(), MockOtpStore::failing());

    let err = f.service.issue_otp(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
    assert_eq!(f.notifier.sent_count(), 0);
}

#[tokio::test]
async fn test_valid_code_validates_exactly_once() {
    let f = fixture();
    let code = f.service.issue_otp(EMAIL).await.unwrap().code;

    f.clock.advance(Duration::minutes(1));
    assert_eq!(
        f.service.validate_otp(EMAIL, &code).await.unwrap(),
        ValidationOutcome::Valid
    );
    assert_eq!(
        f.service.validate_otp(EMAIL, &code).await.unwrap(),
        ValidationOutcome::NotFound
    );
}

#[tokio::test]
async fn test_mismatch_keeps_record() {
    let f = fixture();
    let code = f.service.issue_otp(EMAIL).await.unwrap().code;
    let wrong = if code == "999999" { "100000" } else { "999999" };

    assert_eq!(
        f.service.validate_otp(EMAIL, wrong).await.unwrap(),
        ValidationOutcome::Mismatch
    );
    assert!(f.store.get(EMAIL).await.is_some());

    assert_eq!(
        f.service.validate_otp(EMAIL, &code).await.unwrap(),
        ValidationOutcome::Valid
    );
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let f = fixture();
    let first = f.service.issue_otp(EMAIL).await.unwrap().code;
    let mut second = f.service.issue_otp(EMAIL).await.unwrap().code;
    while second == first {
        second = f.service.issue_otp(EMAIL).await.unwrap().code;
    }

    assert_eq!(f.service.stored_count().await.unwrap(), 1);
    assert_eq!(
        f.service.validate_otp(EMAIL, &first).await.unwrap(),
        ValidationOutcome::Mismatch
    );
    assert_eq!(
        f.service.validate_otp(EMAIL, &second).await.unwrap(),
        ValidationOutcome::Valid
    );
}

#[tokio::test]
async fn test_expired_code_is_removed() {
    let f = fixture();
    let code = f.service.issue_otp(EMAIL).await.unwrap().code;

    f.clock.advance(Duration::minutes(5) + Duration::seconds(1));
    assert_eq!(
        f.service.validate_otp(EMAIL, &code).await.unwrap(),
        ValidationOutcome::Expired
    );
    assert!(f.store.get(EMAIL).await.is_none());
    assert_eq!(
        f.service.validate_otp(EMAIL, &code).await.unwrap(),
        ValidationOutcome::NotFound
    );
}

#[tokio::test]
async fn test_code_still_valid_at_exact_expiry() {
    let f = fixture();
    let code = f.service.issue_otp(EMAIL).await.unwrap().code;

    f.clock.advance(Duration::minutes(5));
    assert_eq!(
        f.service.validate_otp(EMAIL, &code).await.unwrap(),
        ValidationOutcome::Valid
    );
}

#[tokio::test]
async fn test_validate_requires_both_fields() {
    let f = fixture();
    let expected = DomainError::Validation {
        message: "Email and OTP required".to_string(),
    };

    assert_eq!(f.service.validate_otp("", "123456").await.unwrap_err(), expected);
    assert_eq!(f.service.validate_otp(EMAIL, "").await.unwrap_err(), expected);
}

#[tokio::test]
async fn test_verify_mints_identity() {
    let f = fixture();
    let code = f.service.issue_otp(EMAIL).await.unwrap().code;

    let user = f.service.verify(EMAIL, &code).await.unwrap();
    assert_eq!(user.username, EMAIL);
    assert_eq!(user.credit, 0);

    assert_eq!(
        f.service.verify(EMAIL, &code).await.unwrap_err(),
        DomainError::NotFound
    );
}

#[tokio::test]
async fn test_verify_maps_outcomes_to_errors() {
    let f = fixture();
    let code = f.service.issue_otp(EMAIL).await.unwrap().code;
    let wrong = if code == "999999" { "100000" } else { "999999" };

    assert_eq!(f.service.verify(EMAIL, wrong).await.unwrap_err(), DomainError::Mismatch);

    f.clock.advance(Duration::minutes(6));
    assert_eq!(f.service.verify(EMAIL, &code).await.unwrap_err(), DomainError::Expired);
}

#[tokio::test]
async fn test_emails_are_independent() {
    let f = fixture();
    let alice = f.service.issue_otp(EMAIL).await.unwrap().code;
    let bob = f.service.issue_otp("bob@test.com").await.unwrap().code;

    assert_eq!(
        f.service.validate_otp(EMAIL, &alice).await.unwrap(),
        ValidationOutcome::Valid
    );
    assert_eq!(
        f.service.validate_otp("bob@test.com", &bob).await.unwrap(),
        ValidationOutcome::Valid
    );
}

#[tokio::test]
async fn test_purge_expired_removes_only_expired() {
    let f = fixture();
    f.service.issue_otp(EMAIL).await.unwrap();

    f.clock.advance(Duration::minutes(3));
    let bob = f.service.issue_otp("bob@test.com").await.unwrap().code;

    f.clock.advance(Duration::minutes(3));
    assert_eq!(f.service.purge_expired().await.unwrap(), 1);
    assert_eq!(f.service.stored_count().await.unwrap(), 1);
    assert_eq!(
        f.service.validate_otp(EMAIL, "123456").await.unwrap(),
        ValidationOutcome::NotFound
    );
    assert_eq!(
        f.service.validate_otp("bob@test.com", &bob).await.unwrap(),
        ValidationOutcome::Valid
    );
}

#[tokio::test]
async fn test_custom_expiration() {
    let notifier = Arc::new(MockNotifier::new());
    let store = Arc::new(MockOtpStore::new());
    let clock = Arc::new(ManualClock::new(start()));
    let config = OtpServiceConfig {
        code_expiration_minutes: 10,
        ..Default::default()
    };
    let service = OtpService::with_clock(notifier.clone(), store, config, clock.clone());

    let result = service.issue_otp(EMAIL).await.unwrap();
    assert_eq!(result.expires_at, start() + Duration::minutes(10));
    assert!(notifier
        .last_message_to(EMAIL)
        .unwrap()
        .body
        .ends_with("Expires in 10 minutes</p>"));

    clock.advance(Duration::minutes(7));
    assert_eq!(
        service.validate_otp(EMAIL, &result.code).await.unwrap(),
        ValidationOutcome::Valid
    );
}

#[tokio::test]
async fn test_oversized_expiration_does_not_overflow() {
    let store = Arc::new(MockOtpStore::new());
    let config = OtpServiceConfig {
        code_expiration_minutes: i64::MAX,
        ..Default::default()
    };
    let service = OtpService::with_clock(
        Arc::new(MockNotifier::new()),
        store.clone(),
        config,
        Arc::new(ManualClock::new(start())),
    );

    let result = service.issue_otp(EMAIL).await.unwrap();
    assert_eq!(result.expires_at, DateTime::<Utc>::MAX_UTC);
    assert_eq!(
        service.validate_otp(EMAIL, &result.code).await.unwrap(),
        ValidationOutcome::Valid
    );
}

#[tokio::test]
async fn test_non_text_code_runs_the_lookup() {
    let f = fixture();

    assert_eq!(
        f.service
            .validate_submission(EMAIL, SubmittedCode::Other)
            .await
            .unwrap(),
        ValidationOutcome::NotFound
    );

    f.service.issue_otp(EMAIL).await.unwrap();
    assert_eq!(
        f.service
            .validate_submission(EMAIL, SubmittedCode::Other)
            .await
            .unwrap(),
        ValidationOutcome::Mismatch
    );
    assert!(f.store.get(EMAIL).await.is_some());

    f.clock.advance(Duration::minutes(6));
    assert_eq!(
        f.service
            .verify_submission(EMAIL, SubmittedCode::Other)
            .await
            .unwrap_err(),
        DomainError::Expired
    );
    assert!(f.store.get(EMAIL).await.is_none());
}
