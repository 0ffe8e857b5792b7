//! JSON envelopes written to clients.

use serde::Serialize;
use serde_json::{Map, Value};

/// `{"success": true, "body": ..., "message": ...}`
///
/// Unset fields are left out of the output.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<'a> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
}

impl<'a> SuccessEnvelope<'a> {
    pub fn new(body: Option<&'a Value>, message: Option<&'a str>) -> Self {
        Self {
            success: true,
            body,
            message,
        }
    }
}

/// Error envelope for errors with a known status.
///
/// `body` is always present (`null` when absent); `error` is omitted when unset.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub success: bool,
    pub message: &'a str,
    pub body: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

/// Error envelope for everything else. Carries no detail.
#[derive(Debug, Serialize)]
pub struct InternalErrorEnvelope {
    pub success: bool,
    pub message: &'static str,
}

impl Default for InternalErrorEnvelope {
    fn default() -> Self {
        Self {
            success: false,
            message: "Internal Server Error",
        }
    }
}
