//! OS signal handling.

/// Wait for Ctrl+C.
///
/// If the handler cannot be installed this never resolves; shutdown then
/// only happens through [`Shutdown::trigger`](super::Shutdown::trigger).
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
