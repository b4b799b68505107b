//! In-memory implementation of the product repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Product;
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::ProductRepository;

/// Product store kept in process memory.
///
/// Products live in a `Vec` in insertion order. Every operation is a linear
/// scan under one coarse reader/writer lock: `get_all` and `get_by_id` share
/// it, `create`, `update` and `delete` take it exclusively. Contents are lost
/// when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with `products`, kept in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Returns `true` if the store holds no products.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

/// Index of the first product with identity `id`.
///
/// The empty id never matches: it marks an absent record.
fn position(products: &[Product], id: &str) -> Option<usize> {
    products.iter().position(|p| p.has_id() && p.id == id)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        if products.is_empty() {
            return Err(RepositoryError::EmptyCollection);
        }
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        let products = self.products.read().await;
        position(&products, id)
            .map(|idx| products[idx].clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, mut product: Product, id: &str) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let idx = position(&products, id).ok_or(RepositoryError::NotFound)?;

        product.id = id.to_string();
        products[idx] = product.clone();

        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let idx = position(&products, id).ok_or(RepositoryError::NotFound)?;

        products.remove(idx);

        Ok(())
    }
}
