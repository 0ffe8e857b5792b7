//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{body::Body, extract::Request, http::Method, response::Response, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use reply_kit::{Error, HttpServer, ServiceConfig, Shutdown};

/// Build a request with an empty body.
pub fn request(method: Method, uri: &str) -> Request {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Start a server on an ephemeral port.
pub async fn start_server(
    routes: Router,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.service_name = "test".into();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config, routes);
    let shutdown = server.shutdown();
    let handle = tokio::spawn(server.run(listener));

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown, handle)
}

/// HTTP client that never reuses connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
