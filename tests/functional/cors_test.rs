//! Origin allow-list behaviour across the whole router

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use portfolio_backend::api::routes::create_router;
use portfolio_backend::config::Settings;
use portfolio_backend::contact::MemorySink;
use portfolio_backend::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const FRONTEND: &str = "https://maloji-portfolio-frontend.vercel.app";
const EVIL: &str = "https://evil.example";

fn create_test_app() -> (Router, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let state = Arc::new(AppState::with_sink(Settings::default(), sink.clone()));
    (create_router(state), sink)
}

fn request_from(origin: &str, method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, origin);

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_allowed_origin_gets_credentialed_headers() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(request_from(FRONTEND, Method::GET, "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], FRONTEND);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_every_default_origin_is_allowed() {
    for origin in [
        "http://localhost:5173",
        "https://maloji-portfolio-frontend.vercel.app",
        "https://maloji-portfolio-backend.onrender.com",
    ] {
        let (app, _) = create_test_app();
        let response = app
            .oneshot(request_from(origin, Method::GET, "/api/portfolio", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "origin {}", origin);
    }
}

#[tokio::test]
async fn test_request_without_origin_is_allowed() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_disallowed_origin_never_reaches_handler() {
    let (app, sink) = create_test_app();

    let response = app
        .oneshot(request_from(
            EVIL,
            Method::POST,
            "/api/contact",
            Some(json!({ "name": "A", "email": "a@b.com", "message": "hi" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "success": false, "message": "CORS not allowed" }));

    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, FRONTEND)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], FRONTEND);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .contains("POST"));
}

#[tokio::test]
async fn test_preflight_from_disallowed_origin() {
    let (app, _) = create_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, EVIL)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_configured_allow_list_replaces_defaults() {
    let mut settings = Settings::default();
    settings.cors.allowed_origins = vec!["https://example.com/".to_string()];
    let app = create_router(Arc::new(AppState::new(settings)));

    let response = app
        .clone()
        .oneshot(request_from("https://example.com", Method::GET, "/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request_from(FRONTEND, Method::GET, "/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
