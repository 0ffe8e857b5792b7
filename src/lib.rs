//! Response and error conventions for axum services.
//!
//! Controllers return an [`ApiResponse`] (usually built with
//! [`ResponseCreator`]) or an [`Error`]; [`HandlerAdapter`] turns them into
//! axum handlers, and [`GlobalErrorLayer`] turns every forwarded error into a
//! JSON error envelope.

pub mod config;
pub mod errors;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{validate_env, ServiceConfig};
pub use errors::{AppError, EnvNotFoundError, Error};
pub use http::{
    create_callback, ApiResponse, GlobalErrorLayer, HandlerAdapter, HttpServer, ResponseCreator,
};
pub use lifecycle::Shutdown;
