//! Errors reported by product repositories.

use thiserror::Error;

/// Failure kinds a [`crate::domain::repositories::ProductRepository`] can return.
///
/// Services pass these through untouched; the HTTP layer maps them to status
/// codes in [`crate::error::AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// `get_all` was called on a store holding zero products.
    #[error("empty list")]
    EmptyCollection,

    /// No product matched the requested id.
    #[error("product not found")]
    NotFound,
}
