//! Listener binding and graceful shutdown

use anyhow::{Context, Result};
use axum::Router;
use sessionnotes_core::Config;

/// Bind the configured address and serve until a termination signal arrives.
///
/// In-flight uploads are allowed to finish before the future resolves.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        upload_dir = %config.upload_dir().display(),
        max_upload_bytes = config.max_upload_size_bytes(),
        "Listening for requests"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let signal = termination_signal().await;
            tracing::info!(signal, "Draining in-flight requests before exit");
        })
        .await
        .context("HTTP server stopped with an error")
}

/// Resolve with the name of the first termination signal received.
///
/// A handler that cannot be installed is logged and never fires; the other
/// one still can.
async fn termination_signal() -> &'static str {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "SIGINT handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
