//! Demo service for reply-kit.
//!
//! ```text
//!   config (TOML / APP_*) ──▶ ServiceConfig ──▶ init_logging
//!                                    │
//!   --require-env KEY ───────▶ validate_env (fatal on first miss)
//!                                    │
//!   controllers ──▶ HandlerAdapter ──▶ Router ──▶ HttpServer
//!                                                   │
//!                        GlobalErrorLayer ◀─────────┘ (errors → JSON)
//! ```

use std::path::PathBuf;

use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde_json::json;
use tokio::net::TcpListener;

use reply_kit::config::{load_config, read_env, validate_env, ServiceConfig};
use reply_kit::errors::{AppError, Error, TokenErrorReason};
use reply_kit::http::{ApiResponse, CookieOptions, HandlerAdapter, HttpServer, ResponseCreator, SameSite};
use reply_kit::observability::init_logging;

#[derive(Parser)]
#[command(name = "reply-kit")]
#[command(about = "Demo service for the reply-kit response conventions", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults plus APP_* variables otherwise.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment variables that must be set before serving.
    #[arg(long = "require-env")]
    required_env: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::from_env()?,
    };
    init_logging(&config.observability);

    let required: Vec<&str> = cli.required_env.iter().map(String::as_str).collect();
    validate_env(read_env(&required), &config.service_name)?;

    let adapter = HandlerAdapter::from_config(&config);
    let routes = Router::new()
        .route("/health", get(adapter.wrap(health)))
        .route("/session", post(adapter.wrap(login)))
        .route("/session/refresh", post(adapter.wrap(refresh)))
        .route("/conflict", get(adapter.wrap(conflict)));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config, routes);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn health(_request: Request) -> Result<ApiResponse, Error> {
    Ok(ResponseCreator::new()
        .set_message("operational")
        .set_data(json!({ "version": env!("CARGO_PKG_VERSION") }))
        .get())
}

async fn login(_request: Request) -> Result<ApiResponse, Error> {
    let cookie = CookieOptions::new()
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(std::time::Duration::from_secs(7 * 24 * 3600));

    Ok(ResponseCreator::new()
        .set_status_code(201)
        .set_cookie("refresh_token", uuid::Uuid::new_v4().to_string(), Some(cookie))
        .set_message("logged in")
        .get())
}

async fn refresh(request: Request) -> Result<ApiResponse, Error> {
    let has_cookie = request
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("refresh_token="));

    if !has_cookie {
        return Err(AppError::token("refresh token missing", TokenErrorReason::InvalidRefresh).into());
    }

    Ok(ResponseCreator::new().set_message("refreshed").get())
}

async fn conflict(_request: Request) -> Result<ApiResponse, Error> {
    Err(AppError::conflict().with_message("resource already exists").into())
}
