//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::ProductService;
use crate::infrastructure::persistence::InMemoryProductRepository;

/// Concrete product service used by the HTTP layer.
pub type Products = ProductService<InMemoryProductRepository>;

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<Products>,
    /// Token expected in the `token` header on protected routes.
    /// `None` rejects every protected request.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(product_service: Arc<Products>, api_token: Option<String>) -> Self {
        Self {
            product_service,
            api_token: api_token.filter(|t| !t.is_empty()).map(Arc::from),
        }
    }
}
