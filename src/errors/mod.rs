//! Error taxonomy.
//!
//! # Data Flow
//! ```text
//! controller detects a failure
//!     → AppError (request-scoped, carries status/body/tag)
//!     → Err(Error::App) returned to the handler adapter
//!     → forwarded to the global error handler
//!     → JSON error envelope
//!
//! startup / env validation
//!     → EnvNotFoundError (fatal, never turned into a response)
//! ```
//!
//! # Design Decisions
//! - One tagged union (`Error`) is what the translator matches on
//! - Unknown errors are boxed and always collapse to a generic 500

pub mod app;
pub mod env;

use thiserror::Error;

pub use app::{AppError, AppErrorKind, BadRequestReason, TokenErrorReason, TokenReason};
pub use env::EnvNotFoundError;

/// Boxed error for failures outside the taxonomy.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Any error a controller can hand to the adapter.
#[derive(Debug, Error)]
pub enum Error {
    /// Request-scoped application error with a declared status.
    #[error(transparent)]
    App(#[from] AppError),

    /// Missing environment variable. Fatal.
    #[error(transparent)]
    EnvNotFound(#[from] EnvNotFoundError),

    /// Anything else. Details are never exposed to clients.
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl Error {
    /// Wrap an arbitrary error as `Error::Other`.
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// The application error, if this is one.
    pub fn as_app(&self) -> Option<&AppError> {
        match self {
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::other(e)
    }
}

impl From<axum::http::Error> for Error {
    fn from(e: axum::http::Error) -> Self {
        Self::other(e)
    }
}

/// Result type for controllers.
pub type Result<T> = std::result::Result<T, Error>;
