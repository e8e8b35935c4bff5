use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use super::build_router;
use crate::connector::api::Container;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(container: Arc<Container>, public_dir: &Path, addr: &str) -> Result<()> {
    if !public_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {}; non-API paths will return 404",
            public_dir.display()
        );
    }

    let app = build_router(container, public_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
