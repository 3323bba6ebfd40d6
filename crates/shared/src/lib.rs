//! Shared utilities for the Student Manager backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field validators reused by request payloads

pub mod validation;
