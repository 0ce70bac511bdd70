//! Doc Search Server - Binary Entry Point
//!
//! This is the main entry point for the doc-server binary.

use std::sync::Arc;

use clap::Parser;

use doc_search::api::{create_router, AppState};
use doc_search::config::Config;
use doc_search::error::DocResult;
use doc_search::store::DocumentStore;
use doc_search::utils::init_logging;

#[tokio::main]
async fn main() -> DocResult<()> {
    let config = Config::parse();
    init_logging(&config.log_level);

    let store = if config.no_seed {
        DocumentStore::new()
    } else {
        DocumentStore::with_sample_documents()
    };
    tracing::info!("Loaded {} documents", store.len());

    let state = Arc::new(AppState::new(Arc::new(store)));
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} v{} listening on http://{}", doc_search::NAME, doc_search::VERSION, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
