//! Mail Notifier Adapter
//!
//! Bridges any infrastructure [`MailService`] to the core `NotifierTrait`.

use async_trait::async_trait;
use otp_core::services::NotifierTrait;
use std::sync::Arc;

use super::mail_service::MailService;

/// Adapter that implements the core NotifierTrait over a mail service
#[derive(Clone)]
pub struct MailNotifier {
    inner: Arc<dyn MailService>,
}

impl MailNotifier {
    pub fn new(inner: Arc<dyn MailService>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl NotifierTrait for MailNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        self.inner
            .send_mail(to, subject, body)
            .await
            .map_err(|e| e.to_string())
    }
}
