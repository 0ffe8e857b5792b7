//! Response snapshots and the builder that produces them.
//!
//! # Responsibilities
//! - Accumulate status, headers, cookies, message and body for one request
//! - Produce an owned snapshot for the handler adapter
//!
//! # Design Decisions
//! - No validation: any status code is accepted here, the adapter rejects
//!   values `http` cannot represent
//! - Setters chain on `&mut Self`; `get` never mutates

use std::collections::HashMap;

use serde_json::Value;

use crate::http::cookie::{Cookie, CookieOptions};

/// Immutable snapshot of an outgoing response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub cookies: HashMap<String, Cookie>,
    pub message: Option<String>,
    pub body: Option<Value>,
}

impl ApiResponse {
    /// An empty response with the given status.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            cookies: HashMap::new(),
            message: None,
            body: None,
        }
    }
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self::new(200)
    }
}

/// Fluent builder for [`ApiResponse`].
///
/// ```
/// use reply_kit::http::ResponseCreator;
/// use serde_json::json;
///
/// let response = ResponseCreator::new()
///     .set_status_code(201)
///     .set_message("created")
///     .set_data(json!({ "id": 1 }))
///     .get();
/// assert_eq!(response.status_code, 201);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseCreator {
    inner: ApiResponse,
}

impl ResponseCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_code(&mut self, status_code: u16) -> &mut Self {
        self.inner.status_code = status_code;
        self
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.inner.headers.insert(key.into(), value.into());
        self
    }

    pub fn set_cookie(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        options: Option<CookieOptions>,
    ) -> &mut Self {
        self.inner.cookies.insert(name.into(), Cookie::new(value, options));
        self
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn set_data(&mut self, body: impl Into<Value>) -> &mut Self {
        self.inner.body = Some(body.into());
        self
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> ApiResponse {
        self.inner.clone()
    }
}
