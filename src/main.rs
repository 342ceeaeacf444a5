//! Cambio currency-conversion webhook service.
//!
//! Main entry point for the Cambio server. Loads configuration, wires the
//! rates client into the HTTP surface, and serves until shutdown.

use std::time::Duration;

use anyhow::{Context, Result};
use cambio_api::{AppState, Config};
use cambio_rates::RatesClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with structured logging
    init_tracing();

    info!("Starting Cambio currency-conversion webhook service");

    // Load configuration from defaults, file, and environment
    let config = Config::load()?;
    info!(
        host = %config.host,
        port = config.port,
        rates_base_url = %config.rates_base_url,
        rates_timeout_seconds = config.rates_timeout_seconds,
        "Configuration loaded"
    );

    let rates =
        RatesClient::new(config.to_client_config()).context("Failed to create rates client")?;
    let state = AppState::new(rates);

    let addr = config.parse_server_addr()?;
    let request_timeout = Duration::from_secs(config.request_timeout);

    info!(addr = %addr, "Cambio is ready to receive webhook calls");

    cambio_api::start_server(state, addr, request_timeout).await.context("Server failed")?;

    info!("Cambio shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(
                "info,cambio=debug,cambio_api=debug,cambio_rates=debug,tower_http=debug",
            )
        })
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
