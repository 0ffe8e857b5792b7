//! Handler adapter.
//!
//! Turns a controller that *returns* an [`ApiResponse`] into an axum handler.
//!
//! # Data Flow
//! ```text
//! Request
//!     → controller(request).await
//!     → Ok(snapshot):  cookies → headers → status → JSON success envelope
//!     → Err(error):    [dev: log] → ForwardedError extension, no body
//!                      → global error layer translates it
//! ```
//!
//! # Design Decisions
//! - The controller runs at most once per request
//! - The adapter never writes an error body; that belongs to the error layer
//! - Dev mode is passed in at construction, never read from the environment

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::ServiceConfig;
use crate::errors::Error;
use crate::http::envelope::SuccessEnvelope;
use crate::http::request::RequestIdExt;
use crate::http::response::ApiResponse;

/// Future returned by adapted handlers.
pub type CallbackFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// An error handed from a handler to the global error layer.
///
/// Travels as a response extension; the layer removes it before anything is
/// written to the client.
#[derive(Debug, Clone)]
pub struct ForwardedError(Arc<Error>);

impl ForwardedError {
    pub fn new(error: Error) -> Self {
        Self(Arc::new(error))
    }

    pub fn error(&self) -> &Error {
        &self.0
    }
}

/// Attach `error` to an otherwise empty response.
///
/// The placeholder status is 500 so a router missing the error layer still
/// reports a failure.
pub fn forward(error: Error) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.extensions_mut().insert(ForwardedError::new(error));
    response
}

/// Plain axum handlers returning `Result<_, Error>` go through the same path.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        forward(self)
    }
}

/// Wraps controllers into axum handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlerAdapter {
    dev_mode: bool,
}

impl HandlerAdapter {
    pub fn new(dev_mode: bool) -> Self {
        Self { dev_mode }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.mode.is_dev())
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Adapt `controller` into something `axum::routing` accepts.
    pub fn wrap<C, Fut>(
        &self,
        controller: C,
    ) -> impl Fn(Request) -> CallbackFuture + Clone + Send + Sync + 'static
    where
        C: Fn(Request) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<ApiResponse, Error>> + Send + 'static,
    {
        let dev_mode = self.dev_mode;
        move |request: Request| -> CallbackFuture {
            let controller = controller.clone();
            Box::pin(dispatch(controller, request, dev_mode))
        }
    }
}

/// [`HandlerAdapter::wrap`] with dev logging off.
pub fn create_callback<C, Fut>(
    controller: C,
) -> impl Fn(Request) -> CallbackFuture + Clone + Send + Sync + 'static
where
    C: Fn(Request) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<ApiResponse, Error>> + Send + 'static,
{
    HandlerAdapter::default().wrap(controller)
}

async fn dispatch<C, Fut>(controller: C, request: Request, dev_mode: bool) -> Response
where
    C: Fn(Request) -> Fut,
    Fut: Future<Output = Result<ApiResponse, Error>>,
{
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request.request_id().map(str::to_owned);

    let result = match controller(request).await {
        Ok(snapshot) => apply(snapshot),
        Err(error) => Err(error),
    };

    match result {
        Ok(response) => response,
        Err(error) => {
            if dev_mode {
                tracing::warn!(
                    request_id = ?request_id,
                    method = %method,
                    uri = %uri,
                    error = %error,
                    "error from handler callback"
                );
            }
            forward(error)
        }
    }
}

/// Write a snapshot onto a fresh response.
fn apply(snapshot: ApiResponse) -> Result<Response, Error> {
    let mut response = Response::new(Body::empty());

    for (name, cookie) in &snapshot.cookies {
        let value = cookie.to_header_value(name)?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    for (key, value) in &snapshot.headers {
        let name = HeaderName::try_from(key.as_str()).map_err(Error::other)?;
        let value = HeaderValue::try_from(value.as_str()).map_err(Error::other)?;
        response.headers_mut().insert(name, value);
    }

    *response.status_mut() = StatusCode::from_u16(snapshot.status_code).map_err(Error::other)?;

    let envelope = SuccessEnvelope::new(snapshot.body.as_ref(), snapshot.message.as_deref());
    let bytes = serde_json::to_vec(&envelope)?;
    if !response.headers().contains_key(header::CONTENT_TYPE) {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    *response.body_mut() = Body::from(bytes);

    Ok(response)
}
