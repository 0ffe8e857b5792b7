//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)                 process environment
//!     → loader.rs (parse)                → env.rs (required keys present?)
//!     → env overrides (APP_*)            → EnvNotFoundError on first miss
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at the composition root and passed down
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{read_env, validate_env};
pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, LogFormat, ObservabilityConfig, RunMode, ServiceConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
