//! nexus-web binary.
//!
//! Loads config, binds the listener, serves until Ctrl+C / SIGTERM. Any
//! startup failure (bad config, port in use) exits with status 1.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_core::error::Result;
use nexus_web::{app_state::AppState, cli::Cli, server};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "nexus-web failed");
        eprintln!("nexus-web: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = cli.load_config()?;
    let listen = cfg.server.listen_addr()?;

    let listener = server::bind(listen).await?;
    let port = listener
        .local_addr()
        .map(|a| a.port())
        .unwrap_or_else(|_| listen.port());

    let state = AppState::new(cfg, port);
    server::serve(listener, state).await
}
