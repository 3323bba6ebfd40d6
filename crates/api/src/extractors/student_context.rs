//! Request-scoped persistence context extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use persistence::StudentContext;
use std::convert::Infallible;

use crate::app::AppState;

/// A fresh [`StudentContext`] for the current request.
///
/// Built from the shared pool when the handler runs and dropped with the request.
pub struct Students(pub StudentContext);

#[async_trait]
impl FromRequestParts<AppState> for Students {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Students(StudentContext::new(state.pool.clone())))
    }
}
