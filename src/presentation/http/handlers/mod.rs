//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod car;
pub mod health;
pub mod parking_spot;
