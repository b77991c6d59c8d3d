//! HTTP surface of the catalogbot webhook.
//!
//! Wires the catalog, filter and reply crates into an axum router:
//! - `POST /webhook`: intent fulfillment
//! - `GET /health`: liveness probe

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use catalogbot_catalog::{Catalog, CatalogError, JsonFileCatalog, SeedCatalog};
use catalogbot_reply::ReplyConfig;
use tower_http::trace::TraceLayer;

pub mod webhook;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// JSON catalog file; the built-in seed catalog when absent
    pub catalog_path: Option<PathBuf>,
    pub reply: ReplyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            catalog_path: None,
            reply: ReplyConfig::default(),
        }
    }
}

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub reply: Arc<ReplyConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, reply: ReplyConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            reply: Arc::new(reply),
        }
    }
}

/// Load the configured catalog, falling back to the seed data.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::load(&JsonFileCatalog::new(path)),
        None => Catalog::load(&SeedCatalog),
    }
}

/// Build the router.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook::webhook))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let app = build_app(AppState::new(catalog, config.reply));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "Webhook server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
