//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the application's routes with the global error layer
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and serve until shutdown
//! - Surface a fatal error raised while serving

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::errors::Error;
use crate::http::error_handler::GlobalErrorLayer;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::{shutdown_signal, Shutdown};

/// HTTP server for a service built on this crate.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    shutdown: Shutdown,
}

impl HttpServer {
    /// Create a new HTTP server serving `routes`.
    pub fn new(config: ServiceConfig, routes: Router) -> Self {
        let shutdown = Shutdown::new();
        let router = Self::build_router(&config, routes, shutdown.clone());
        Self {
            router,
            config,
            shutdown,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, routes: Router, shutdown: Shutdown) -> Router {
        routes
            .layer(GlobalErrorLayer::new().with_shutdown(shutdown))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, e.g. for driving it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle for triggering or observing shutdown.
    pub fn shutdown(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns the fatal error if shutdown was caused by one.
    pub async fn run(self, listener: TcpListener) -> Result<(), Error> {
        let addr = listener.local_addr().map_err(Error::other)?;
        tracing::info!(
            address = %addr,
            service = %self.config.service_name,
            mode = ?self.config.mode,
            "HTTP server starting"
        );

        let shutdown = self.shutdown.clone();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await
            .map_err(Error::other)?;

        if let Some(fatal) = self.shutdown.take_fatal() {
            tracing::error!(error = %fatal, "HTTP server stopped on fatal error");
            return Err(fatal.into());
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn wait_for_shutdown(shutdown: Shutdown) {
    tokio::select! {
        _ = shutdown_signal() => {}
        _ = shutdown.wait() => {}
    }
}
