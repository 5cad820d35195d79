//! Background sweeper for expired passcodes
//!
//! Expired records are already rejected on read; sweeping only bounds the
//! memory held by emails that never come back to validate.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use otp_core::errors::DomainResult;
use otp_core::services::{NotifierTrait, OtpService, OtpStoreTrait};

/// Periodically purges expired records through the OTP service
pub struct OtpSweeper<N: NotifierTrait + 'static, S: OtpStoreTrait + 'static> {
    service: Arc<OtpService<N, S>>,
    interval: Duration,
}

impl<N: NotifierTrait + 'static, S: OtpStoreTrait + 'static> OtpSweeper<N, S> {
    /// Create a sweeper over the service's store and clock
    ///
    /// An interval of zero seconds disables the background task.
    pub fn new(service: Arc<OtpService<N, S>>, interval_secs: u64) -> Self {
        Self {
            service,
            interval: Duration::from_secs(interval_secs),
        }
    }

    /// Whether the background task will run
    pub fn is_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Run a single sweep, returning how many records were removed
    pub async fn sweep_once(&self) -> DomainResult<usize> {
        self.service.purge_expired().await
    }

    /// Start the sweeper as a background task
    ///
    /// Returns `None` when the sweeper is disabled.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.is_enabled() {
            warn!("Passcode sweeper is disabled");
            return None;
        }

        Some(tokio::spawn(async move {
            info!(
                "Passcode sweeper started - will run every {} seconds",
                self.interval.as_secs()
            );

            let mut timer = tokio::time::interval(self.interval);
            // The first tick completes immediately.
            timer.tick().await;

            loop {
                timer.tick().await;
                if let Err(e) = self.sweep_once().await {
                    error!("Passcode sweep failed: {}", e);
                }
            }
        }))
    }
}
