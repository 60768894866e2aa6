//! HTTP server (axum).
//!
//! Routes: `POST /api/generate`, `POST /api/rewrite`, `GET /health`.
//!
//! **Public API**: [`run_server`], [`run_server_on_listener`], [`router`].

mod app;
mod error;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::gateway::GenerationGateway;

pub use app::{router, AppState, GenerationOutput};
pub use error::{ApiError, ErrorBody};

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run_server(addr: SocketAddr, gateway: GenerationGateway) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    run_server_on_listener(listener, gateway, shutdown_signal()).await
}

/// Serve on an existing listener until `shutdown` resolves. Tests bind
/// `127.0.0.1:0` and pass the listener in.
///
/// # Errors
///
/// Returns an error if the listener address cannot be read or serving fails.
pub async fn run_server_on_listener<F>(
    listener: TcpListener,
    gateway: GenerationGateway,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, model = %gateway.model_id(), "HTTP server listening");

    let app = router(Arc::new(AppState { gateway }));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => tracing::warn!(error = %e, "failed to listen for shutdown signal"),
    }
}
