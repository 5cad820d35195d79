//! Integration tests for the passcode lifecycle under concurrent access

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use std::sync::Arc;

    use otp_core::errors::DomainError;
    use otp_core::services::otp::mock::{ManualClock, MockNotifier, MockOtpStore};
    use otp_core::services::{OtpService, OtpServiceConfig};
    use otp_core::ValidationOutcome;

    fn service() -> (
        Arc<OtpService<MockNotifier, MockOtpStore>>,
        Arc<MockNotifier>,
        Arc<ManualClock>,
    ) {
        let notifier = Arc::new(MockNotifier::new());
        let clock = Arc::new(ManualClock::default());
        let service = Arc::new(OtpService::with_clock(
            notifier.clone(),
            Arc::new(MockOtpStore::new()),
            OtpServiceConfig::default(),
            clock.clone(),
        ));
        (service, notifier, clock)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_validation_succeeds_once() {
        let (service, notifier, _clock) = service();
        service.issue_otp("alice@test.com").await.unwrap();
        let code = notifier.last_code_for("alice@test.com").unwrap();

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let service = service.clone();
                let code = code.clone();
                tokio::spawn(async move { service.verify("alice@test.com", &code).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(e) => assert_eq!(e, DomainError::NotFound),
            }
        }
        assert_eq!(successes, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_issuance_leaves_one_record() {
        let (service, notifier, _clock) = service();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.issue_otp("alice@test.com").await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(service.stored_count().await.unwrap(), 1);
        assert_eq!(notifier.sent_count(), 10);
    }

    #[tokio::test]
    async fn test_expiry_scenario() {
        let (service, notifier, clock) = service();
        service.issue_otp("alice@test.com").await.unwrap();
        let code = notifier.last_code_for("alice@test.com").unwrap();

        clock.advance(Duration::minutes(6));
        assert_eq!(
            service.validate_otp("alice@test.com", &code).await.unwrap(),
            ValidationOutcome::Expired
        );
        assert_eq!(
            service.validate_otp("alice@test.com", &code).await.unwrap(),
            ValidationOutcome::NotFound
        );
    }
}
