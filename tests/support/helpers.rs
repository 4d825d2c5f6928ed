// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use catalog_core::application::ports::time::Clock;
use catalog_core::application::services::ApplicationServices;
use catalog_core::domain::slug::{SlugGenerator, SlugOptions};
use catalog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{DummyClock, InMemoryCatalog};

pub fn build_services(catalog: Arc<InMemoryCatalog>, options: SlugOptions) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    ApplicationServices::new(
        catalog.clone(),
        catalog.clone(),
        catalog.clone(),
        catalog,
        clock,
        Arc::new(SlugGenerator::new(options)),
    )
}

pub fn build_test_state(catalog: Arc<InMemoryCatalog>, options: SlugOptions) -> HttpState {
    HttpState {
        services: Arc::new(build_services(catalog, options)),
    }
}

pub fn make_test_router() -> axum::Router {
    make_router_with(Arc::new(InMemoryCatalog::new()), SlugOptions::default())
}

pub fn make_router_with(catalog: Arc<InMemoryCatalog>, options: SlugOptions) -> axum::Router {
    build_router(build_test_state(catalog, options), &[])
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
