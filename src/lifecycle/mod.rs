//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Ctrl+C or fatal error → trigger → server drains → run() returns
//!
//! Signals (signals.rs):
//!     SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - A fatal misconfiguration raised while serving stops the whole server
//! - The fatal error is returned from `HttpServer::run`, so the process
//!   exits with it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
