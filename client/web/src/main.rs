// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use anyhow::Result;
use clap::{ArgAction, Parser};
use greeting_web::{app_router, Environment, HttpGreetingSource, WebConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Greeting frontend
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Web UI host
    #[arg(long)]
    host: Option<String>,

    /// Web UI port
    #[arg(long)]
    port: Option<u16>,

    /// Use the production backend URL
    #[arg(long, action = ArgAction::SetTrue)]
    production: bool,

    /// Backend API base URL (overrides the environment default)
    #[arg(long)]
    api_url: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Command-line flags take precedence over file and environment config
    fn apply(&self, config: &mut WebConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.production {
            config.environment = Environment::Production;
        }
        if let Some(api_url) = &self.api_url {
            config.api_url = Some(api_url.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut config = WebConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    let source = HttpGreetingSource::new(&config)?;
    info!(
        environment = ?config.environment,
        url = %source.url(),
        "Backend greeting source configured"
    );

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Frontend listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app_router(source))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Frontend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
