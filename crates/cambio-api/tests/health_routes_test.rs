//! Availability and liveness endpoint tests.
//!
//! Tests the `GET /` availability banner and the `GET /health` liveness
//! document, including response formatting, method handling, and the
//! request-id middleware that wraps every route.

use std::time::Duration;

use axum::http::StatusCode;
use cambio_api::{create_router, AppState};
use cambio_rates::RatesClient;
use serde_json::Value;
use tower::ServiceExt;

/// Builds application state with a default rates client.
///
/// These routes never contact the rate service, so the client target does
/// not matter here.
fn test_state() -> AppState {
    let rates = RatesClient::with_defaults().expect("rates client should build");
    AppState::new(rates)
}

/// Test the root route serves the availability banner verbatim.
///
/// Uptime probes and humans poking the service in a browser rely on this
/// exact text, so it is asserted as a whole string.
#[tokio::test]
async fn availability_banner_served_on_root() {
    let app = create_router(test_state(), Duration::from_secs(30));

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("availability response should have content-type header");
    assert!(content_type.to_str().unwrap().contains("text/plain"));

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body_bytes).expect("failed to parse response body");

    assert_eq!(
        body_str,
        "Currency Converter Bot is running! Use POST requests to communicate with DialogFlow."
    );
}

/// Test the liveness endpoint returns a structured JSON document.
#[tokio::test]
async fn health_check_returns_alive_document() {
    let app = create_router(test_state(), Duration::from_secs(30));

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("health check should have content-type header");
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let health_response: Value =
        serde_json::from_slice(&body_bytes).expect("health check response should be valid JSON");

    assert_eq!(health_response["status"], "alive");
    assert_eq!(health_response["service"], "cambio-api");
    assert!(health_response.get("version").is_some());
    assert!(health_response.get("timestamp").is_some());
}

/// Test every response carries the request-id header added by middleware.
#[tokio::test]
async fn responses_include_request_id_header() {
    let app = create_router(test_state(), Duration::from_secs(30));

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    let request_id = response
        .headers()
        .get("X-Request-Id")
        .expect("response should carry X-Request-Id header");
    assert!(!request_id.to_str().unwrap().is_empty());
}

/// Test the liveness endpoint only accepts GET.
#[tokio::test]
async fn health_check_rejects_post() {
    let app = create_router(test_state(), Duration::from_secs(30));

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Test unknown routes fall through to 404 rather than the webhook.
#[tokio::test]
async fn unknown_route_returns_not_found() {
    let app = create_router(test_state(), Duration::from_secs(30));

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/nope")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.expect("failed to make request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test concurrent liveness checks complete without contention.
#[tokio::test]
async fn health_check_handles_concurrent_requests() {
    let state = test_state();

    let mut handles = Vec::new();

    for _ in 0..10 {
        let state = state.clone();
        let handle = tokio::spawn(async move {
            let app = create_router(state, Duration::from_secs(30));

            let request = axum::http::Request::builder()
                .method("GET")
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap();

            app.oneshot(request).await.expect("failed to make request")
        });

        handles.push(handle);
    }

    let responses = futures::future::join_all(handles).await;

    for response_result in responses {
        let response = response_result.expect("health check task should complete");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
