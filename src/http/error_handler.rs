//! Global error handling.
//!
//! # Responsibilities
//! - Map any forwarded [`Error`] to the final JSON error response
//! - Keep internal details of unknown errors away from clients
//! - Escalate fatal misconfiguration instead of answering
//!
//! # Design Decisions
//! - `translate_error` is a pure dispatch over the error variant
//! - The layer only acts on responses carrying a `ForwardedError`
//! - A re-raised `EnvNotFoundError` unwinds the request task and triggers
//!   server shutdown; no response is served for that request

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tower::{Layer, Service};

use crate::errors::{EnvNotFoundError, Error};
use crate::http::callback::ForwardedError;
use crate::http::envelope::{ErrorEnvelope, InternalErrorEnvelope};
use crate::lifecycle::Shutdown;

/// Message used when an application error carries an empty one.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Internal Server Error";

/// Turn an error into its client response.
///
/// Returns `Err` for fatal configuration errors, which must not be answered.
pub fn translate_error(error: &Error) -> Result<Response, EnvNotFoundError> {
    match error {
        Error::App(e) => {
            let message = if e.message().is_empty() {
                UNKNOWN_ERROR_MESSAGE
            } else {
                e.message()
            };
            let envelope = ErrorEnvelope {
                success: false,
                message,
                body: e.body(),
                error: e.error(),
            };
            Ok((e.status_code(), Json(envelope)).into_response())
        }
        Error::EnvNotFound(e) => {
            tracing::error!(
                key = %e.key(),
                service = %e.service(),
                "application gonna crash due to invalid Env's"
            );
            Err(e.clone())
        }
        Error::Other(e) => {
            tracing::error!(error = %e, "Unhandled error");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InternalErrorEnvelope::default()),
            )
                .into_response())
        }
    }
}

/// Replace a forwarded error with its translated response.
///
/// Responses without a `ForwardedError` pass through untouched.
pub(crate) fn handle_forwarded(mut response: Response, shutdown: Option<&Shutdown>) -> Response {
    let Some(forwarded) = response.extensions_mut().remove::<ForwardedError>() else {
        return response;
    };

    match translate_error(forwarded.error()) {
        Ok(translated) => translated,
        Err(fatal) => {
            if let Some(shutdown) = shutdown {
                shutdown.raise_fatal(fatal.clone());
            }
            std::panic::resume_unwind(Box::new(fatal))
        }
    }
}

/// Tower layer installing the global error handler around a router.
#[derive(Clone, Default)]
pub struct GlobalErrorLayer {
    shutdown: Option<Shutdown>,
}

impl GlobalErrorLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the server through `shutdown` when a fatal error is raised.
    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = Some(shutdown);
        self
    }
}

impl<S> Layer<S> for GlobalErrorLayer {
    type Service = GlobalErrorService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GlobalErrorService {
            inner,
            shutdown: self.shutdown.clone(),
        }
    }
}

/// Service produced by [`GlobalErrorLayer`].
#[derive(Clone)]
pub struct GlobalErrorService<S> {
    inner: S,
    shutdown: Option<Shutdown>,
}

impl<S, B> Service<Request<B>> for GlobalErrorService<S>
where
    S: Service<Request<B>, Response = Response> + 'static,
    S::Future: Send + 'static,
    B: 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let future = self.inner.call(request);
        let shutdown = self.shutdown.clone();
        Box::pin(async move {
            let response = future.await?;
            Ok(handle_forwarded(response, shutdown.as_ref()))
        })
    }
}
