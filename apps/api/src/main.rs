mod config;
mod engine;
mod errors;
mod llm_client;
mod models;
mod profile;
mod records;
mod routes;
mod sessions;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::records::loader::JsonDirSource;
use crate::records::RecordCache;
use crate::routes::build_router;
use crate::sessions::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Kiosk API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize record cache and load once so a broken data dir fails at startup
    let records = Arc::new(RecordCache::new(
        Arc::new(JsonDirSource::new(config.data_dir.clone())),
        Duration::from_secs(config.records_refresh_secs),
    ));
    records.get().await?;
    info!(
        "Record source ready at {} (refresh every {}s)",
        config.data_dir.display(),
        config.records_refresh_secs
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        records,
        generator: Arc::new(llm),
        sessions: SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
