//! Static token authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Header carrying the shared write token.
pub const TOKEN_HEADER: &str = "token";

/// Authenticates requests against the token configured in `TOKEN_ENV`.
///
/// # Header Format
///
/// ```text
/// token: <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` without calling the handler if:
/// - The `token` header is missing, empty or not valid UTF-8
/// - The header does not equal the configured token
/// - No token is configured
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/product", post(create_product_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let authorized = match st.api_token.as_deref() {
        Some(expected) => !provided.is_empty() && provided == expected,
        None => false,
    };

    if !authorized {
        tracing::debug!(path = %req.uri().path(), "rejected request with invalid token");
        return Err(AppError::unauthorized(
            "Invalid token",
            json!({"reason": "token header is missing or does not match"}),
        ));
    }

    Ok(next.run(req).await)
}
