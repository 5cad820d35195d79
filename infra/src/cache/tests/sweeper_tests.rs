//! Unit tests for the passcode sweeper

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use otp_core::domain::entities::OtpRecord;
use otp_core::services::otp::mock::{ManualClock, MockNotifier};
use otp_core::services::{OtpService, OtpServiceConfig, OtpStoreTrait};

use crate::cache::{InMemoryOtpStore, OtpSweeper};

type TestService = OtpService<MockNotifier, InMemoryOtpStore>;

fn create_service(start: DateTime<Utc>) -> (Arc<TestService>, Arc<InMemoryOtpStore>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start));
    let store = Arc::new(InMemoryOtpStore::new());
    let service = Arc::new(OtpService::with_clock(
        Arc::new(MockNotifier::new()),
        store.clone(),
        OtpServiceConfig::default(),
        clock.clone(),
    ));
    (service, store, clock)
}

#[tokio::test]
async fn test_sweep_once_removes_only_expired() {
    let start = Utc::now();
    let (service, store, clock) = create_service(start);
    store
        .insert(
            "old@test.com",
            OtpRecord::new("111111".to_string(), start, Duration::minutes(1)),
        )
        .await
        .unwrap();
    store
        .insert(
            "new@test.com",
            OtpRecord::new("222222".to_string(), start, Duration::minutes(5)),
        )
        .await
        .unwrap();

    let sweeper = OtpSweeper::new(service, 60);
    assert_eq!(sweeper.sweep_once().await.unwrap(), 0);

    clock.advance(Duration::minutes(2));
    assert_eq!(sweeper.sweep_once().await.unwrap(), 1);
    assert!(store.get("new@test.com").await.is_some());
    assert!(store.get("old@test.com").await.is_none());
}

#[tokio::test]
async fn test_disabled_sweeper_does_not_start() {
    let (service, _, _) = create_service(Utc::now());
    let sweeper = Arc::new(OtpSweeper::new(service, 0));
    assert!(!sweeper.is_enabled());
    assert!(sweeper.start_background_task().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_on_interval() {
    let start = Utc::now();
    let (service, store, clock) = create_service(start);
    store
        .insert(
            "old@test.com",
            OtpRecord::new("111111".to_string(), start, Duration::minutes(1)),
        )
        .await
        .unwrap();
    clock.advance(Duration::minutes(2));

    let sweeper = Arc::new(OtpSweeper::new(service, 60));
    let handle = sweeper.start_background_task().unwrap();

    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    assert_eq!(store.len().await.unwrap(), 0);

    handle.abort();
}
