mod analysis;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::pipeline::Analyzer;
use crate::analysis::reference::ReferenceLists;
use crate::config::{Config, StoreBackend};
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{JsonFileReportStore, MemoryReportStore, PgReportStore, ReportStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Checker v{}", env!("CARGO_PKG_VERSION"));

    // Reference lists are validated once here; the pipeline never re-checks them.
    let lists = match &config.reference_lists_path {
        Some(path) => ReferenceLists::from_json_file(path)
            .with_context(|| format!("Loading reference lists from {}", path.display()))?,
        None => ReferenceLists::default(),
    };
    let analyzer = Analyzer::new(Arc::new(lists));
    info!(
        "Reference lists loaded: {} skills, {} job keywords",
        analyzer.lists().skills().len(),
        analyzer.lists().job_keywords().len()
    );

    let store = build_store(&config).await?;

    let state = AppState {
        config: config.clone(),
        analyzer,
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the configured report store backend.
async fn build_store(config: &Config) -> Result<Arc<dyn ReportStore>> {
    let store: Arc<dyn ReportStore> = match config.store_backend {
        StoreBackend::Json => {
            let json_store = JsonFileReportStore::new(config.report_file.clone());
            info!("Report store: JSON file at {}", json_store.path().display());
            Arc::new(json_store)
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres report store")?;
            let pool = create_pool(url).await?;
            info!("Report store: PostgreSQL");
            Arc::new(PgReportStore::connect(pool).await?)
        }
        StoreBackend::Memory => {
            info!("Report store: in-memory (history is not persisted)");
            Arc::new(MemoryReportStore::new())
        }
    };
    Ok(store)
}
