//! Service entrypoint: configuration, logging, one MongoDB connection,
//! then serve until ctrl-c.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gestao_roupas::config::AppConfig;
use gestao_roupas::server::{build_router, AppState};
use gestao_roupas::storage;

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file is optional; real environments set the variables
    // directly.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let db = storage::connect(&config).await?;
    tracing::info!(database = %config.database, "connected to MongoDB");

    let app = build_router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}
