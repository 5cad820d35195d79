//! Process-level configuration and logging setup

use otp_shared::config::{AppConfig, LogFormat, LoggingConfig};

/// Load configuration, reading `.env` first when present
pub fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the configured level. Records emitted through the
/// `log` facade are forwarded to the same subscriber.
pub fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(logging.colored)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    let installed = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
