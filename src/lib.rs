//! # Product API
//!
//! A small HTTP CRUD service for products, backed by an in-process store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Product entity, repository trait and errors
//! - **Application Layer** ([`application`]) - Service delegating to the repository
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and seed data
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export TOKEN_ENV="change-me"
//! cargo run
//!
//! curl localhost:8080/api/v1/product
//! curl -X POST localhost:8080/api/v1/product -H 'token: change-me' \
//!      -d '{"id":"4","name":"Agua","price":1.5}' -H 'content-type: application/json'
//! ```
//!
//! The store is not persisted: products vanish when the process exits.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ProductService;
    pub use crate::domain::entities::Product;
    pub use crate::domain::errors::RepositoryError;
    pub use crate::domain::repositories::ProductRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryProductRepository;
    pub use crate::state::AppState;
}
