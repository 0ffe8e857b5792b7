//! Request-scoped application errors.
//!
//! Each kind fixes a default status code and message. All of them can be
//! overridden after construction with the `with_*` modifiers.

use axum::http::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// The category of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppErrorKind {
    BadRequest,
    Conflict,
    Unauthorized,
    Token,
    InternalServer,
    Validation,
    DatabaseOp,
    /// Built directly from a status code and message.
    Custom,
}

/// A closed set of token failure reasons.
///
/// Implement this on your own enum to constrain the tags a token error may
/// carry at a given call site.
pub trait TokenReason {
    /// Wire representation placed in the `error` field.
    fn as_str(&self) -> &str;
}

/// The stock token failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenErrorReason {
    InvalidAccess,
    InvalidRefresh,
}

impl TokenReason for TokenErrorReason {
    fn as_str(&self) -> &str {
        match self {
            Self::InvalidAccess => "invalid_access",
            Self::InvalidRefresh => "invalid_refresh",
        }
    }
}

/// Tags a bad request error may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadRequestReason {
    Banned,
}

impl BadRequestReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banned => "banned",
        }
    }
}

/// Application error carrying an HTTP status and optional detail.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AppError {
    kind: AppErrorKind,
    message: String,
    status_code: StatusCode,
    body: Option<Map<String, Value>>,
    error: Option<String>,
}

impl AppError {
    fn of(kind: AppErrorKind, message: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code,
            body: None,
            error: None,
        }
    }

    /// Base constructor: any status, any message.
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        Self::of(AppErrorKind::Custom, message, status_code)
    }

    /// 400 "Bad request". Always carries an (empty) body object.
    pub fn bad_request() -> Self {
        Self::of(AppErrorKind::BadRequest, "Bad request", StatusCode::BAD_REQUEST)
            .with_body(Map::new())
    }

    /// 400 with a reason tag, e.g. a banned client.
    pub fn bad_request_because(message: impl Into<String>, reason: BadRequestReason) -> Self {
        Self::bad_request()
            .with_message(message)
            .with_error(reason.as_str())
    }

    /// 409 "Conflict error".
    pub fn conflict() -> Self {
        Self::of(AppErrorKind::Conflict, "Conflict error", StatusCode::CONFLICT)
    }

    /// 401 "Unauthorized access".
    pub fn unauthorized() -> Self {
        Self::of(
            AppErrorKind::Unauthorized,
            "Unauthorized access",
            StatusCode::UNAUTHORIZED,
        )
    }

    /// 401 token failure. The reason tag is mandatory.
    pub fn token<R: TokenReason>(message: impl Into<String>, reason: R) -> Self {
        Self::of(AppErrorKind::Token, message, StatusCode::UNAUTHORIZED).with_error(reason.as_str())
    }

    /// 500 "Internal Server error".
    pub fn internal_server() -> Self {
        Self::of(
            AppErrorKind::InternalServer,
            "Internal Server error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    /// 400 "Input Validation Error".
    pub fn validation() -> Self {
        Self::of(
            AppErrorKind::Validation,
            "Input Validation Error",
            StatusCode::BAD_REQUEST,
        )
    }

    /// 503 "Database Operation Error".
    pub fn database_op() -> Self {
        Self::of(
            AppErrorKind::DatabaseOp,
            "Database Operation Error",
            StatusCode::SERVICE_UNAVAILABLE,
        )
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn kind(&self) -> AppErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
