//! API route configuration.
//!
//! Only product creation requires the `token` header, enforced by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_product_handler, delete_product_handler, get_product_handler, ping_handler,
    product_list_handler, update_product_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Versioned API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /ping`          - Liveness check
/// - `POST   /product`       - Create a product (token required)
/// - `GET    /product`       - List all products
/// - `GET    /product/{id}`  - Fetch a product
/// - `PUT    /product/{id}`  - Replace a product
/// - `DELETE /product/{id}`  - Delete a product
pub fn routes(state: AppState) -> Router<AppState> {
    let create = post(create_product_handler)
        .route_layer(middleware::from_fn_with_state(state, auth::layer));

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/product", get(product_list_handler).merge(create))
        .route(
            "/product/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
}
