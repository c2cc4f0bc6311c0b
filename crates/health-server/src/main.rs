//! Health Server binary.

use anyhow::Context;
use health_server::{ServerConfig, run_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load().context("failed to load configuration")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        request_timeout_secs = config.request_timeout_secs,
        "Starting Health Server"
    );

    if let Err(err) = run_server(config).await {
        tracing::error!(error = %err, "Server failed");
        return Err(err.into());
    }

    Ok(())
}
