//! Persistence layer for the Student Manager backend.
//!
//! This crate contains:
//! - Database connection management and schema bootstrap
//! - Entity definitions (database row mappings)
//! - The request-scoped persistence context
//! - Query metrics

pub mod context;
pub mod db;
pub mod entities;
pub mod metrics;

pub use context::{SaveOutcome, StudentContext};
