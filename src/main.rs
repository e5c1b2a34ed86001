//! Skycast server binary.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skycast::agent::{SessionStore, WeatherAgent};
use skycast::config::SkycastConfig;
use skycast::server::{router, AppState};

#[derive(Parser, Debug)]
#[command(name = "skycast", about = "Conversational weather assistant")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> skycast::error::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = SkycastConfig::from_env();
    // Missing API keys are fatal here, never per-request.
    let agent = WeatherAgent::from_config(&config)?;

    let state = AppState {
        agent: Arc::new(agent),
        sessions: Arc::new(SessionStore::new()),
    };

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "skycast listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
