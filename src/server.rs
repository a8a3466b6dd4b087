//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::domain::entities::AnalyticsSnapshot;
use crate::infrastructure::seed::{sample_analytics, sample_links};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use tokio::signal;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the application state from configuration.
///
/// With `SEED_SAMPLE_DATA` the store starts with the three sample links and
/// their click counters; otherwise it starts empty with no visitors.
pub fn build_state(config: &Config) -> AppState {
    let (links, analytics) = if config.seed_sample_data {
        (sample_links(), sample_analytics())
    } else {
        (Vec::new(), AnalyticsSnapshot::default())
    };
    tracing::info!(links = links.len(), "Link store initialized");

    AppState::new(
        links,
        analytics,
        config.hub_settings(),
        config.session_cookie_secure,
    )
}

/// Runs the HTTP server with the given configuration until Ctrl+C.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);

    let app = NormalizePathLayer::trim_trailing_slash()
        .layer(app_router(state, config.rate_limit_enabled));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!(
            "Failed to listen for Ctrl+C: {}. Shutting down anyway.",
            e
        ),
    }
}
