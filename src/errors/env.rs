//! Fatal configuration errors.

use thiserror::Error;

/// A required environment variable is missing.
///
/// Not request-scoped: raising this through the error handler shuts the
/// service down instead of producing a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key {key} has invalid ENV value from {service}")]
pub struct EnvNotFoundError {
    key: String,
    service: String,
}

impl EnvNotFoundError {
    pub fn new(key: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            service: service.into(),
        }
    }

    /// Name of the missing variable.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Service that required it.
    pub fn service(&self) -> &str {
        &self.service
    }
}
