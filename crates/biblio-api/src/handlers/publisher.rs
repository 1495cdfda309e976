//! Publisher endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use biblio_core::error::AppError;
use biblio_core::types::pagination::PageResponse;
use biblio_entity::publisher::Publisher;
use biblio_service::publisher::{CreatePublisherRequest, UpdatePublisherRequest};

use crate::dto::request::IncludeBooksQuery;
use crate::error::ApiResult;
use crate::dto::response::{MessageResponse, PublisherResponse};
use crate::extractors::Pagination;
use crate::state::AppState;

/// GET /publisher. Paginated publisher listing.
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<Publisher>>> {
    let publishers = state.publisher_service.list(&page).await?;
    Ok(Json(publishers))
}

/// GET /publisher/{id}. Optionally populates the publisher's books.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<IncludeBooksQuery>,
) -> ApiResult<Json<PublisherResponse>> {
    let (publisher, books) = state
        .publisher_service
        .get(id, query.include_books)
        .await?
        .ok_or_else(|| AppError::not_found("Publisher not found"))?;

    Ok(Json(PublisherResponse { publisher, books }))
}

/// GET /publisher/name/{name}. Prefix search; an empty result is a 404
/// with an empty array body.
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Response> {
    let publishers = state.publisher_service.search_by_name(&name).await?;
    if publishers.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(serde_json::json!([]))).into_response());
    }
    Ok(Json(publishers).into_response())
}

/// POST /publisher.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePublisherRequest>,
) -> ApiResult<(StatusCode, Json<Publisher>)> {
    let publisher = state.publisher_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

/// PUT /publisher/{id}.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePublisherRequest>,
) -> ApiResult<Json<Publisher>> {
    let publisher = state
        .publisher_service
        .update(id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Publisher not found"))?;
    Ok(Json(publisher))
}

/// DELETE /publisher/{id}. Returns the deleted record.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Publisher>> {
    let publisher = state
        .publisher_service
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("Publisher not found"))?;
    Ok(Json(publisher))
}

/// DELETE /publisher/reset. Reseeds the publisher collection.
pub async fn reset(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    state.seed_service.reseed_publishers().await?;
    Ok(Json(MessageResponse {
        message: "Publishers reseeded".to_string(),
    }))
}
