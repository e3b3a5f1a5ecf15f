mod config;
mod errors;
mod progression;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::skills::source::source_from_config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GradePath API v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate the requirement and advice tables
    let source = source_from_config(&config);
    let requirements = source
        .load_requirements()
        .await
        .context("Failed to load requirement table")?;
    let advice = source
        .load_advice()
        .await
        .context("Failed to load advice table")?;
    info!("Skill tables loaded ({})", source.describe());
    info!(
        "Priority thresholds: high >= {}, medium >= {}",
        config.priority_thresholds.high, config.priority_thresholds.medium
    );

    // Build app state
    let state = AppState::new(config.clone(), requirements, advice);

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
