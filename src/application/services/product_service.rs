//! Product management service.

use crate::domain::entities::Product;
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::ProductRepository;
use std::sync::Arc;

const COMPONENT: &str = "ProductService";

/// Service for product CRUD operations.
///
/// Delegates every call to the repository. Failures are logged with the
/// operation name and returned to the caller unchanged.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new product.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
        self.repository
            .create(product)
            .await
            .inspect_err(|e| log_failure("create", e, "error creating product"))
    }

    /// Lists all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::EmptyCollection`] if the store is empty.
    pub async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.repository
            .get_all()
            .await
            .inspect_err(|e| log_failure("get_all", e, "error getting all products"))
    }

    /// Retrieves a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the product does not exist.
    pub async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        self.repository
            .get_by_id(id)
            .await
            .inspect_err(|e| log_failure("get_by_id", e, "error getting product by id"))
    }

    /// Replaces the product stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the product does not exist.
    pub async fn update(&self, product: Product, id: &str) -> Result<Product, RepositoryError> {
        self.repository
            .update(product, id)
            .await
            .inspect_err(|e| log_failure("update", e, "error updating product by id"))
    }

    /// Deletes the product stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the product does not exist.
    pub async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|e| log_failure("delete", e, "error deleting product by id"))
    }
}

fn log_failure(operation: &'static str, error: &RepositoryError, message: &'static str) {
    tracing::warn!(component = COMPONENT, operation, error = %error, "{message}");
}
