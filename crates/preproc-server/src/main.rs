//! Preprocessing Assistant HTTP Server
//!
//! Serves step generation, validation and provider configuration over REST.

use anyhow::Result;
use preproc_repository::ConfigStore;
use preproc_server::api::{create_router, AppState};
use preproc_server::config::ServerConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Load provider settings
    let settings = config.settings().open()?;
    let store = ConfigStore::load(settings).await?;
    info!("Provider configuration loaded from {:?} store", config.settings().source);

    let app = create_router(AppState::new(Arc::new(store)));

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Generate steps: POST http://{}/v1/assistant/generate", addr);
    info!("  Configuration: http://{}/v1/config", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
