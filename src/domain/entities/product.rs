//! Domain entity representing a product in the catalogue.

use chrono::{DateTime, Utc};

/// A product held in the store.
///
/// The `id` is supplied by the caller at creation time and is never generated
/// by the service. An empty `id` is a sentinel meaning "absent": lookups never
/// return a product whose id is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    /// Free-form code. Not checked for uniqueness.
    pub code_value: String,
    pub is_published: bool,
    pub expiration: DateTime<Utc>,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let product = Product::new(
    ///     "1".to_string(),
    ///     "Coco Cola".to_string(),
    ///     10,
    ///     "123456789".to_string(),
    ///     true,
    ///     Utc::now(),
    ///     10.5,
    /// );
    /// ```
    pub fn new(
        id: String,
        name: String,
        quantity: i64,
        code_value: String,
        is_published: bool,
        expiration: DateTime<Utc>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            code_value,
            is_published,
            expiration,
            price,
        }
    }

    /// Returns `true` when the product carries a usable identity.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_product_creation() {
        let now = Utc::now();
        let product = Product::new(
            "1".to_string(),
            "Coco Cola".to_string(),
            10,
            "123456789".to_string(),
            true,
            now,
            10.5,
        );

        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Coco Cola");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.code_value, "123456789");
        assert!(product.is_published);
        assert_eq!(product.expiration, now);
        assert_eq!(product.price, 10.5);
        assert!(product.has_id());
    }

    #[test]
    fn test_product_empty_id_is_absent() {
        let product = Product::new(
            String::new(),
            "Nameless".to_string(),
            0,
            String::new(),
            false,
            Utc::now(),
            0.0,
        );

        assert!(!product.has_id());
    }
}
