//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod student;

pub use student::{NewStudent, StudentEntity};
