//! journal - Learning journal web service
//!
//! REST API over SQLite for journal entries, with an embedded browser
//! client served from the same process.

use anyhow::Result;
use journal::config::Config;
use journal::{build_router, cors_layer, AppState};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting journal v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // Fails fast when DATABASE_URL is absent
    let config = Config::load();

    let pool = journal::db::connect(&config.database_url).await?;
    info!("✓ Connected to database");

    let cors = cors_layer(config.client_origin.as_deref());
    let state = AppState::new(pool);
    let app = build_router(state, cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("journal listening on http://localhost:{}", config.port);
    info!("Health check: http://localhost:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
