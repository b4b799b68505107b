//! HTTP middleware for request processing and protection.
//!
//! Provides token authentication and request tracing.

pub mod auth;
pub mod tracing;
