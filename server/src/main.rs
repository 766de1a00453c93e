// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::env;

use anyhow::Result;
use greeting_server::app_router;
use greeting_server::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::log::LogLevel;

mod log;

#[tokio::main]
async fn main() -> Result<()> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_owned());
    let log_level: LogLevel = log_level.parse().unwrap_or_else(|err| fatal!("{err}"));
    let _guard = log::init(log_level);

    // Load config from custom path if specified
    let config_path = env::var("CONFIG_FILE").ok();
    let config = ServerConfig::load_with_env(config_path.as_deref())?;

    let app = app_router(&config)?;

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
