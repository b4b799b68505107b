//! Handlers for product CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a product.
///
/// # Endpoint
///
/// `POST /api/v1/product` (requires the `token` header)
///
/// # Errors
///
/// Returns 400 if the body is not a valid product.
/// Returns 500 if the store rejects the product.
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let Json(payload) = payload?;

    let product = state
        .product_service
        .create(payload.into())
        .await
        .map_err(|e| {
            AppError::internal("Internal server error", json!({"reason": e.to_string()}))
        })?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Lists all products in insertion order.
///
/// # Endpoint
///
/// `GET /api/v1/product`
///
/// # Errors
///
/// Returns 500 when the store is empty.
pub async fn product_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.get_all().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Returns a single product.
///
/// # Endpoint
///
/// `GET /api/v1/product/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn get_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_by_id(&id).await?;

    Ok(Json(product.into()))
}

/// Replaces a product.
///
/// # Endpoint
///
/// `PUT /api/v1/product/{id}`
///
/// Every field is overwritten with the body's values. The `id` in the body is
/// ignored; the stored product keeps the id from the path.
///
/// # Errors
///
/// Returns 400 if the body is not a valid product.
/// Returns 404 if the product does not exist.
pub async fn update_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Json(payload) = payload?;

    let product = state.product_service.update(payload.into(), &id).await?;

    Ok(Json(product.into()))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /api/v1/product/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn delete_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_service.delete(&id).await?;

    Ok(Json(MessageResponse::new("Product eliminated")))
}
