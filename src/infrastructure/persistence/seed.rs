//! Sample catalogue loaded into the store at startup.

use chrono::{DateTime, Utc};

use crate::domain::entities::Product;

/// Returns the three sample products with ids `"1"`, `"2"` and `"3"`.
///
/// Every product expires at `expiration`; pass `Utc::now()` at startup.
pub fn seed_products(expiration: DateTime<Utc>) -> Vec<Product> {
    [("1", "Coco Cola", 10.5), ("2", "Pepsito", 8.5), ("3", "Fantastica", 5.5)]
        .into_iter()
        .map(|(id, name, price)| {
            Product::new(
                id.to_string(),
                name.to_string(),
                10,
                "123456789".to_string(),
                true,
                expiration,
                price,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products_order() {
        let products = seed_products(Utc::now());

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(products[1].name, "Pepsito");
        assert_eq!(products[1].price, 8.5);
        assert!(products.iter().all(|p| p.is_published && p.quantity == 10));
    }
}
