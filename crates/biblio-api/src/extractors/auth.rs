//! Bearer-token extractor.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use biblio_core::error::AppError;
use biblio_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified caller identity, extracted from the `Authorization` header.
///
/// Rejects with 401 before the handler runs when the header is missing,
/// not a bearer scheme, or carries an invalid or expired token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::unauthorized("Missing authorization header")))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                ApiError(AppError::unauthorized(
                    "Authorization header must use Bearer scheme",
                ))
            })?
            .trim();

        let claims = state.jwt_decoder.decode(token)?;
        Ok(AuthUser(RequestContext::from(claims)))
    }
}
