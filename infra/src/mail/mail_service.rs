//! Mail Service Interface
//!
//! Defines the trait for outgoing mail providers.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Mail service trait for sending HTML email
///
/// Implementations include:
/// - SMTP relay through `lettre`
/// - Mock implementation for development
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send an HTML email
    ///
    /// # Arguments
    ///
    /// * `to` - Recipient address
    /// * `subject` - Subject line
    /// * `html_body` - HTML body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Identifier of the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check that the provider can be reached
    ///
    /// Default implementation always succeeds.
    async fn verify(&self) -> Result<(), InfrastructureError> {
        Ok(())
    }

    /// Check if the service is available
    async fn is_available(&self) -> bool {
        self.verify().await.is_ok()
    }
}
