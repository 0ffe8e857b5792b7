//! Controller → adapter → global error layer, driven without a socket.

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use reply_kit::errors::{AppError, Error, TokenErrorReason};
use reply_kit::http::{ApiResponse, HandlerAdapter, ResponseCreator, X_REQUEST_ID};
use reply_kit::{HttpServer, ServiceConfig};

mod common;

async fn ok(_req: Request) -> Result<ApiResponse, Error> {
    Ok(ResponseCreator::new().set_data(json!({ "ok": true })).get())
}

async fn token(_req: Request) -> Result<ApiResponse, Error> {
    Err(AppError::token("bad token", TokenErrorReason::InvalidAccess).into())
}

async fn boom(_req: Request) -> Result<ApiResponse, Error> {
    Err(Error::other(std::io::Error::other("disk on fire")))
}

async fn plain_handler() -> Result<&'static str, Error> {
    Err(AppError::unauthorized().into())
}

fn router() -> Router {
    let adapter = HandlerAdapter::new(true);
    let routes = Router::new()
        .route("/ok", get(adapter.wrap(ok)))
        .route("/token", get(adapter.wrap(token)))
        .route("/boom", get(adapter.wrap(boom)))
        .route("/plain", get(plain_handler));

    HttpServer::new(ServiceConfig::default(), routes).router()
}

#[tokio::test]
async fn test_success_path() {
    let response = router().oneshot(common::request(Method::GET, "/ok")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert!(response.headers().contains_key(X_REQUEST_ID));
    assert_eq!(
        common::body_json(response).await,
        json!({ "success": true, "body": { "ok": true } })
    );
}

#[tokio::test]
async fn test_app_error_translated() {
    let response = router().oneshot(common::request(Method::GET, "/token")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_json(response).await,
        json!({
            "success": false,
            "message": "bad token",
            "body": null,
            "error": "invalid_access"
        })
    );
}

#[tokio::test]
async fn test_unknown_error_translated() {
    let response = router().oneshot(common::request(Method::GET, "/boom")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({ "success": false, "message": "Internal Server Error" })
    );
}

#[tokio::test]
async fn test_plain_handler_error_translated() {
    let response = router().oneshot(common::request(Method::GET, "/plain")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_json(response).await,
        json!({ "success": false, "message": "Unauthorized access", "body": null })
    );
}

#[tokio::test]
async fn test_client_request_id_is_echoed() {
    let mut request = common::request(Method::GET, "/ok");
    request.headers_mut().insert(X_REQUEST_ID, "req-42".parse().unwrap());

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[X_REQUEST_ID], "req-42");
}
