//! Movie Catalog Service - Binary Entry Point
//!
//! Loads the catalog once, then serves it over HTTP until Ctrl+C.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use movie_catalog::api::{create_router, AppState};
use movie_catalog::catalog::{Catalog, CsvDatasetSource};
use movie_catalog::config::ServiceConfig;
use movie_catalog::types::ServiceResult;

#[tokio::main]
async fn main() -> ServiceResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        "Starting {} v{}",
        movie_catalog::NAME,
        movie_catalog::VERSION
    );

    // 1. Catalog (fatal on failure):
    let catalog = Catalog::load(&CsvDatasetSource::new(&config.dataset_path))?;

    // 2. Lexicon:
    let lexicon = config.build_lexicon()?;

    // 3. HTTP Router:
    let state = Arc::new(AppState::new(catalog, lexicon));
    let app = create_router(state);

    // 4. Serve:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
