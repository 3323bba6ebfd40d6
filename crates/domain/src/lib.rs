//! Domain layer for the Student Manager backend.
//!
//! This crate contains:
//! - Domain models (Student)
//! - Request and response payloads for the students resource

pub mod models;
