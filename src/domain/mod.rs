//! Domain layer containing the product entity and its storage contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete storage lives in [`crate::infrastructure::persistence`].
//!
//! # Modules
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Failures reported by repositories

pub mod entities;
pub mod errors;
pub mod repositories;
