//! SMTP mail service backed by `lettre`

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};
use uuid::Uuid;

use otp_shared::config::MailConfig;
use otp_shared::utils::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Mail service that relays through an authenticated SMTP server
#[derive(Clone)]
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    host: String,
}

impl SmtpMailService {
    /// Build the transport from mail configuration
    ///
    /// The sender is `"<from_name>" <username>`. No connection is opened here.
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "EMAIL_USER and EMAIL_PASS must be set for SMTP delivery".to_string(),
            ));
        }

        let address: Address = config.username.parse()?;
        let sender = Mailbox::new(Some(config.from_name.clone()), address);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender,
            host: config.smtp_host.clone(),
        })
    }

    fn next_message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.sender.email.domain())
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let recipient: Mailbox = to.parse()?;
        let message_id = self.next_message_id();

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())?;

        self.transport.send(message).await.map_err(|e| {
            error!(
                provider = "smtp",
                host = %self.host,
                to = %mask_email(to),
                error = %e,
                "SMTP delivery failed"
            );
            InfrastructureError::from(e)
        })?;

        info!(
            target: "mail_service",
            provider = "smtp",
            to = %mask_email(to),
            message_id = %message_id,
            "Mail sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }

    async fn verify(&self) -> Result<(), InfrastructureError> {
        if self.transport.test_connection().await? {
            Ok(())
        } else {
            Err(InfrastructureError::Mail(format!(
                "SMTP server {} refused the connection",
                self.host
            )))
        }
    }
}
