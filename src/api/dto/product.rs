//! DTOs for product endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

/// Request body for `POST /api/v1/product` and `PUT /api/v1/product/{id}`.
///
/// Absent fields take their zero value (empty string, `0`, `false`,
/// `0001-01-01T00:00:00Z`, `0.0`). On update the `id` field is ignored in favour of the path.
///
/// ```json
/// {
///   "id": "4",
///   "name": "Agua",
///   "quantity": 3,
///   "code_value": "987654321",
///   "is_published": false,
///   "expiration": "2026-12-31T00:00:00Z",
///   "price": 1.25
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: DateTime<Utc>,
    pub price: f64,
}

/// Seconds from the Unix epoch back to `0001-01-01T00:00:00Z`.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// Timestamp bound to an absent `expiration`.
pub fn zero_time() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIME_SECS, 0).unwrap_or_default()
}

impl Default for ProductRequest {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            quantity: 0,
            code_value: String::new(),
            is_published: false,
            expiration: zero_time(),
            price: 0.0,
        }
    }
}

impl From<ProductRequest> for Product {
    fn from(r: ProductRequest) -> Self {
        Product::new(
            r.id,
            r.name,
            r.quantity,
            r.code_value,
            r.is_published,
            r.expiration,
            r.price,
        )
    }
}

/// JSON representation of a stored product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: DateTime<Utc>,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            code_value: p.code_value,
            is_published: p.is_published,
            expiration: p.expiration,
            price: p.price,
        }
    }
}
