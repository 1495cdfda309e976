//! Book endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use biblio_core::error::AppError;
use biblio_core::types::pagination::PageResponse;
use biblio_entity::book::Book;
use biblio_service::book::{CreateBookRequest, PopulatedBook, UpdateBookRequest};

use crate::dto::request::ResetQuery;
use crate::error::ApiResult;
use crate::dto::response::MessageResponse;
use crate::extractors::Pagination;
use crate::state::AppState;

/// GET /book. Paginated listing with author/publisher references resolved.
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<PopulatedBook>>> {
    let books = state.book_service.list(&page).await?;
    Ok(Json(books))
}

/// GET /book/{id}.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PopulatedBook>> {
    let book = state
        .book_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Book not found"))?;
    Ok(Json(book))
}

/// GET /book/title/{title}. Prefix search; an empty result is a 404 with
/// an empty array body.
pub async fn search_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Response> {
    let books = state.book_service.search_by_title(&title).await?;
    if books.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(serde_json::json!([]))).into_response());
    }
    Ok(Json(books).into_response())
}

/// POST /book.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateBookRequest>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let book = state.book_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /book/{id}.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookRequest>,
) -> ApiResult<Json<Book>> {
    let book = state
        .book_service
        .update(id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Book not found"))?;
    Ok(Json(book))
}

/// DELETE /book/{id}. Returns the deleted record.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Book>> {
    let book = state
        .book_service
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("Book not found"))?;
    Ok(Json(book))
}

/// DELETE /book/reset. With `?all=true`, reseeds every collection and
/// rebuilds the random links; otherwise reseeds books only.
pub async fn reset(
    State(state): State<AppState>,
    Query(query): Query<ResetQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let message = if query.all {
        state.seed_service.reset_all().await?;
        "All collections reseeded and relinked"
    } else {
        state.seed_service.reseed_books().await?;
        "Books reseeded"
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}
