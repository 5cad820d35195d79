//! Main OTP service implementation

use std::sync::Arc;

use otp_shared::utils::{mask_email, validators};

use crate::domain::entities::OtpRecord;
use crate::domain::value_objects::{SubmittedCode, ValidationOutcome, VerifiedUser};
use crate::errors::{DomainError, DomainResult};

use super::clock::{Clock, SystemClock};
use super::config::OtpServiceConfig;
use super::traits::{NotifierTrait, OtpStoreTrait};
use super::types::IssueOtpResult;

/// OTP service for issuing and validating email passcodes
pub struct OtpService<N: NotifierTrait, S: OtpStoreTrait> {
    /// Notifier for delivering passcodes
    notifier: Arc<N>,
    /// Store holding one record per email
    store: Arc<S>,
    /// Time source for expiry decisions
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<N: NotifierTrait, S: OtpStoreTrait> OtpService<N, S> {
    /// Create a new OTP service reading wall-clock time
    ///
    /// # Arguments
    ///
    /// * `notifier` - Notifier implementation
    /// * `store` - Store implementation
    /// * `config` - Service configuration
    pub fn new(notifier: Arc<N>, store: Arc<S>, config: OtpServiceConfig) -> Self {
        Self::with_clock(notifier, store, config, Arc::new(SystemClock))
    }

    /// Create a new OTP service with an explicit time source
    pub fn with_clock(
        notifier: Arc<N>,
        store: Arc<S>,
        config: OtpServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            notifier,
            store,
            clock,
            config,
        }
    }

    /// Issue a passcode for an email address
    ///
    /// This method:
    /// 1. Rejects an empty email
    /// 2. Generates a new passcode from the OS CSPRNG
    /// 3. Stores it, replacing any earlier passcode for the email
    /// 4. Emails it through the notifier once the store lock is released
    ///
    /// The record stays stored when delivery fails.
    ///
    /// # Returns
    ///
    /// * `Ok(IssueOtpResult)` - The passcode, its expiry and the message id
    /// * `Err(DomainError::Validation)` - If the email is empty
    /// * `Err(DomainError::Notification)` - If delivery fails
    /// * `Err(DomainError::Internal)` - If the store fails
    pub async fn issue_otp(&self, email: &str) -> DomainResult<IssueOtpResult> {
        if !validators::is_present(Some(email)) {
            return Err(DomainError::Validation {
                message: "Email is required".to_string(),
            });
        }

        let masked = mask_email(email);
        let record = OtpRecord::generate(self.clock.now(), self.config.ttl());
        let code = record.code.clone();
        let expires_at = record.expires_at;

        self.store.insert(email, record).await.map_err(|e| {
            tracing::error!(
                email = %masked,
                error = %e,
                event = "otp_storage_failed",
                "Failed to store passcode"
            );
            DomainError::Internal {
                message: format!("Failed to store passcode: {}", e),
            }
        })?;

        tracing::info!(
            email = %masked,
            expires_at = %expires_at,
            event = "otp_issued",
            "Issued new passcode"
        );

        let body = self.config.render_body(&code);
        let message_id = self
            .notifier
            .send(email, &self.config.email_subject, &body)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %masked,
                    error = %e,
                    event = "otp_notification_failed",
                    "Failed to send passcode email"
                );
                DomainError::Notification { message: e }
            })?;

        tracing::debug!(
            email = %masked,
            message_id = %message_id,
            "Passcode email handed to notifier"
        );

        Ok(IssueOtpResult {
            code,
            expires_at,
            message_id,
        })
    }

    /// Validate a submitted passcode
    ///
    /// Classification and deletion happen atomically in the store, so a code
    /// validates at most once even under concurrent requests.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidationOutcome)` - `NotFound`, `Expired`, `Mismatch` or `Valid`
    /// * `Err(DomainError::Validation)` - If either field is empty
    /// * `Err(DomainError::Internal)` - If the store fails
    pub async fn validate_otp(&self, email: &str, code: &str) -> DomainResult<ValidationOutcome> {
        self.validate_submission(email, SubmittedCode::Text(code)).await
    }

    /// Validate a passcode of any submitted type
    ///
    /// A non-text code goes through the same lookup, so an unknown email
    /// still reports `NotFound` and an expired record is still removed.
    pub async fn validate_submission(
        &self,
        email: &str,
        code: SubmittedCode<'_>,
    ) -> DomainResult<ValidationOutcome> {
        if !validators::is_present(Some(email)) || !code.is_present() {
            return Err(DomainError::Validation {
                message: "Email and OTP required".to_string(),
            });
        }

        let masked = mask_email(email);
        let outcome = self
            .store
            .consume(email, code, self.clock.now())
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %masked,
                    error = %e,
                    event = "otp_validation_error",
                    "Store failure during passcode validation"
                );
                DomainError::Internal {
                    message: format!("Failed to validate passcode: {}", e),
                }
            })?;

        if outcome.is_valid() {
            tracing::info!(
                email = %masked,
                outcome = %outcome,
                event = "otp_validated",
                "Passcode validated and consumed"
            );
        } else {
            tracing::warn!(
                email = %masked,
                outcome = %outcome,
                event = "otp_rejected",
                "Passcode validation rejected"
            );
        }

        Ok(outcome)
    }

    /// Validate a passcode and mint an identity on success
    ///
    /// Every outcome other than `Valid` is returned as the matching error.
    pub async fn verify(&self, email: &str, code: &str) -> DomainResult<VerifiedUser> {
        self.verify_submission(email, SubmittedCode::Text(code)).await
    }

    /// [`verify`](Self::verify) for a passcode of any submitted type
    pub async fn verify_submission(
        &self,
        email: &str,
        code: SubmittedCode<'_>,
    ) -> DomainResult<VerifiedUser> {
        let outcome = self.validate_submission(email, code).await?;
        match DomainError::from_outcome(outcome) {
            Some(error) => Err(error),
            None => Ok(VerifiedUser::new(email)),
        }
    }

    /// Remove every expired record
    ///
    /// Called periodically by the background sweeper.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records removed
    /// * `Err(DomainError::Internal)` - If the store fails
    pub async fn purge_expired(&self) -> DomainResult<usize> {
        let removed = self
            .store
            .purge_expired(self.clock.now())
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to purge expired passcodes: {}", e),
            })?;

        if removed > 0 {
            tracing::debug!(removed = removed, event = "otp_purged", "Purged expired passcodes");
        }

        Ok(removed)
    }

    /// Number of records currently held by the store
    pub async fn stored_count(&self) -> DomainResult<usize> {
        self.store.len().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to count passcodes: {}", e),
        })
    }
}
