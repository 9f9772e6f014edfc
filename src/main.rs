//! ip-echo-server entry point.
//!
//! Parses the listen address and starts the Axum HTTP server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ip_echo_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "application listening");

    ip_echo_server::serve(listener)
        .await
        .context("server terminated")?;

    Ok(())
}
