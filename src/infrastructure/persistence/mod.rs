//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryProductRepository`] - Non-durable product store guarded by a
//!   reader/writer lock
//!
//! [`seed`] provides the sample catalogue loaded at startup.

pub mod memory_product_repository;
pub mod seed;

pub use memory_product_repository::InMemoryProductRepository;
pub use seed::seed_products;
