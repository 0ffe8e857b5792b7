//! HTTP handling subsystem.
//!
//! # Data Flow
//! ```text
//! Request
//!     → request.rs (request ID)
//!     → callback.rs (controller → ApiResponse → cookies/headers/status/JSON)
//!         ↳ error → ForwardedError
//!     → error_handler.rs (ForwardedError → JSON error envelope)
//!     → Send to client
//! ```

pub mod callback;
pub mod cookie;
pub mod envelope;
pub mod error_handler;
pub mod request;
pub mod response;
pub mod server;

pub use callback::{create_callback, forward, ForwardedError, HandlerAdapter};
pub use cookie::{Cookie, CookieError, CookieOptions, CookiePriority, SameSite};
pub use error_handler::{translate_error, GlobalErrorLayer};
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::{ApiResponse, ResponseCreator};
pub use server::HttpServer;
