mod config;
mod db;
mod errors;
mod models;
mod routes;
mod search;
mod state;
mod store;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{CandidateStore, MemoryCandidateStore, PgCandidateStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting People API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    info!("Candidate store initialized (backend: {})", store.backend());

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres when DATABASE_URL is set, otherwise the in-memory demo dataset.
async fn build_store(config: &Config) -> Result<Arc<dyn CandidateStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            if config.run_migrations {
                run_migrations(&pool).await?;
            }
            Ok(Arc::new(PgCandidateStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; serving in-memory demo candidates");
            let store = MemoryCandidateStore::demo();
            info!("Loaded {} demo candidates", store.len());
            Ok(Arc::new(store))
        }
    }
}

/// Restricts CORS to CORS_ALLOWED_ORIGINS; permissive when none are configured.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
