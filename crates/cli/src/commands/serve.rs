use anyhow::Result;
use std::sync::Arc;
use stronghold_http::{AppState, create_router};
use stronghold_storage::StorageBackend;

pub(crate) async fn run(port: u16, host: String, memory: bool) -> Result<()> {
    let storage = if memory {
        tracing::warn!("Using in-memory storage; sets are lost on exit");
        Arc::new(StorageBackend::new_memory())
    } else {
        crate::open_postgres().await?
    };
    tracing::info!(backend = storage.kind(), "Storage ready");

    let router = create_router(Arc::new(AppState::new(storage)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    tracing::info!("Health check: http://{}/api/health", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
