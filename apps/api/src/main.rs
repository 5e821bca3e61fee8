mod career;
mod config;
mod errors;
mod extraction;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::career::catalog::CareerCatalog;
use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careerpath API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = CareerCatalog::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            info!("Catalog loaded from {}", path.display());
            catalog
        }
        None => {
            info!("Using built-in catalog");
            CareerCatalog::builtin()
        }
    };

    // Vocabulary is compiled here, once, before the listener accepts anything.
    let state = AppState::new(config.clone(), catalog, Arc::new(PdfTextExtractor));
    if state.vocabulary.is_empty() {
        warn!("Skill vocabulary is empty; uploads will never match any skill");
    }
    info!(
        "Skill vocabulary compiled: {} patterns, {} career profiles",
        state.vocabulary.len(),
        state.catalog.careers.len()
    );

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_allowed_origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN must be a valid header value")?,
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
