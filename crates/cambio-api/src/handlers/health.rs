//! Availability and liveness handlers for service monitoring.
//!
//! The root route doubles as a human-readable availability banner (the
//! webhook itself lives on `POST /`), while `/health` serves a JSON
//! liveness document for orchestration systems.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{debug, instrument};

/// Banner served on `GET /`.
const AVAILABILITY_BANNER: &str =
    "Currency Converter Bot is running! Use POST requests to communicate with DialogFlow.";

/// Availability endpoint on `GET /`.
///
/// Returns a static plain-text banner so a browser visit or uptime probe
/// can confirm the service is reachable without crafting a webhook call.
#[instrument(name = "availability")]
pub async fn availability() -> &'static str {
    AVAILABILITY_BANNER
}

/// Liveness check endpoint on `GET /health`.
///
/// Returns a minimal JSON document confirming the process is serving
/// requests. The rate service is deliberately not probed here; it is only
/// contacted on behalf of webhook calls, and its failures degrade to
/// fallback replies rather than making the service unhealthy.
#[instrument(name = "health_check")]
pub async fn health_check() -> Response {
    debug!("Performing liveness check");

    let response = serde_json::json!({
        "status": "alive",
        "timestamp": Utc::now(),
        "service": "cambio-api",
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(response)).into_response()
}
