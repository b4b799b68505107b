//! Repository trait for product storage.

use crate::domain::entities::Product;
use crate::domain::errors::RepositoryError;
use async_trait::async_trait;

/// Repository interface for managing products.
///
/// Lookups scan the store in insertion order and act on the first product
/// whose id matches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryProductRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Appends a product to the store and returns it unchanged.
    ///
    /// Never fails. Duplicate ids are not rejected.
    async fn create(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Returns every product in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::EmptyCollection`] when the store is empty.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Returns the first product whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no product matches or the
    /// match has an empty id.
    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError>;

    /// Replaces the first product whose id equals `id` with `product`.
    ///
    /// The stored record keeps `id` as its identity; `product.id` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no product matches. The store
    /// is left unchanged in that case.
    async fn update(&self, product: Product, id: &str) -> Result<Product, RepositoryError>;

    /// Removes the first product whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no product matches.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
