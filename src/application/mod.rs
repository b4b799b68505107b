//! Application layer services.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::product_service::ProductService`] - Product CRUD with failure logging

pub mod services;
