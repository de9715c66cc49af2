use crate::error::ServerError;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Bind the HTTP listener.
pub async fn bind(bind_address: &str, http_port: u16) -> Result<TcpListener, ServerError> {
    let addr = format!("{bind_address}:{http_port}");
    TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::Bind {
            address: addr.clone(),
            source: e,
        })
}

/// Serve `app` until SIGINT/SIGTERM or until `shutdown_token` is cancelled.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown_token: CancellationToken,
) -> Result<(), ServerError> {
    info!("Server listening on {}", listener.local_addr()?);
    info!("  - GET  /api/v1/health                  (health check)");
    info!("  - POST /api/v1/device/{{id}}/logs        (log submission)");
    info!("  - GET  /api/v1/device/{{id}}/settings    (shipping settings)");
    info!("  - POST /api/v1/device/{{id}}/heartbeat   (liveness)");

    let shutdown = shutdown_token.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                () = shutdown_signal() => shutdown.cancel(),
                () = shutdown.cancelled() => info!("Shutdown requested"),
            }
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
