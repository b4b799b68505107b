//! Handler for the liveness endpoint.

use axum::Json;

/// Answers `"pong"`.
///
/// # Endpoint
///
/// `GET /api/v1/ping`
pub async fn ping_handler() -> Json<&'static str> {
    Json("pong")
}
