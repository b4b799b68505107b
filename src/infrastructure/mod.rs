//! Infrastructure layer implementing domain interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - In-process product store

pub mod persistence;
