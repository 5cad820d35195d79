use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use otp_api::app::create_app;
use otp_api::config::{init_logging, load_config};
use otp_api::routes::otp::AppState;
use otp_core::services::{OtpService, OtpServiceConfig};
use otp_infra::mail::{create_mail_service, log_transport_status, MailNotifier};
use otp_infra::{InMemoryOtpStore, OtpSweeper};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();
    init_logging(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        mail_provider = %config.mail.provider,
        otp_expiry_minutes = config.otp.expiry_minutes,
        "Starting MailPass OTP server"
    );

    let mail_service = create_mail_service(&config.mail);
    let transport = mail_service.clone();
    tokio::spawn(async move {
        log_transport_status(transport.as_ref()).await;
    });

    let notifier = Arc::new(MailNotifier::new(mail_service));
    let otp_service = Arc::new(OtpService::new(
        notifier,
        Arc::new(InMemoryOtpStore::new()),
        OtpServiceConfig::from(&config.otp),
    ));

    let _sweeper = Arc::new(OtpSweeper::new(
        otp_service.clone(),
        config.otp.sweep_interval_secs,
    ))
    .start_background_task();

    let app_state = web::Data::new(AppState::new(otp_service));
    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}
