//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod path;
pub mod student_context;
pub mod validated_json;

pub use path::Path;
pub use student_context::Students;
pub use validated_json::ValidatedJson;
