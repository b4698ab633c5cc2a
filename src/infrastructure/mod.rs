//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations over sqlx

pub mod database;
pub mod repositories;
