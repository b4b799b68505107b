//! Core domain entities.
//!
//! Entities are plain data structures without business logic. JSON shapes
//! live in [`crate::api::dto`] and convert to and from these types.

pub mod product;

pub use product::Product;
