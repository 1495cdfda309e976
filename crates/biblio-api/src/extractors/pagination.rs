//! Pagination query extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use biblio_core::error::AppError;
use biblio_core::types::pagination::PageRequest;

use crate::dto::request::PageQuery;
use crate::error::ApiError;

/// Validated pagination parameters.
///
/// Both `limit` and `page` are required and must be positive; anything
/// else rejects with 400 before the handler runs.
#[derive(Debug, Clone)]
pub struct Pagination(pub PageRequest);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError(AppError::validation(format!("Invalid query parameters: {e}"))))?;

        let page = PageRequest::from_params(query.limit, query.page)?;
        Ok(Pagination(page))
    }
}
