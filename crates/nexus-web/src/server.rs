//! Listener lifecycle: bind, serve, graceful shutdown.
//!
//! A bind failure is fatal and immediate; there are no retries.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use nexus_core::error::{NexusError, Result};

use crate::{app_state::AppState, router};

pub async fn bind(listen: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(listen)
        .await
        .map_err(|e| NexusError::Bind(format!("{listen}: {e}")))
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serve until `signal` resolves, then drain in-flight requests.
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener
        .local_addr()
        .map_err(|e| NexusError::Internal(format!("local_addr failed: {e}")))?;
    let app = router::build_router(state);

    tracing::info!(%local, "nexus-web listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .map_err(|e| NexusError::Internal(format!("server failed: {e}")))?;
    tracing::info!("nexus-web stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
