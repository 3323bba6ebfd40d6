//! Path parameter extractor with JSON error bodies.

use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// Same as `axum::extract::Path`, but a value that fails to parse is rejected
/// with a `validation_error` body instead of plain text.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);
