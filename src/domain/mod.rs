//! # Domain Layer
//!
//! Core business entities of the parking control service, independent of
//! any framework or infrastructure concern. Repository traits define the
//! data access contracts implemented in the infrastructure layer.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
