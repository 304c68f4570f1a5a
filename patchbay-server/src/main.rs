use anyhow::Result;
use patchbay_server::{AppState, Config, MemorySessionStore, SessionGateway, SignalingRouter, app};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    // The in-memory store serves local runs; a persistent store implements
    // the same SessionStore trait in deployment.
    let store = Arc::new(MemorySessionStore::new());
    let state = AppState {
        router: SignalingRouter::new(),
        gateway: SessionGateway::new(store),
    };

    info!("Signaling relay listening on http://{}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
