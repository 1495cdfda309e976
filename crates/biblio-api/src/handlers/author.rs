//! Author endpoints.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use biblio_core::error::AppError;
use biblio_core::types::pagination::PageResponse;
use biblio_entity::author::Author;
use biblio_service::author::{RegisterAuthorRequest, UpdateAuthorRequest};

use crate::dto::request::{IncludeBooksQuery, LoginRequest};
use crate::error::ApiResult;
use crate::dto::response::{AuthorResponse, MessageResponse, TokenResponse};
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// GET /author. Paginated author listing.
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<Author>>> {
    let authors = state.author_service.list(&page).await?;
    Ok(Json(authors))
}

/// GET /author/{id}. Optionally populates the author's books.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<IncludeBooksQuery>,
) -> ApiResult<Json<AuthorResponse>> {
    let (author, books) = state
        .author_service
        .get(id, query.include_books)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found"))?;

    Ok(Json(AuthorResponse { author, books }))
}

/// GET /author/name/{name}. Prefix search; an empty result is a 404 with
/// an empty array body.
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Response> {
    let authors = state.author_service.search_by_name(&name).await?;
    if authors.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(serde_json::json!([]))).into_response());
    }
    Ok(Json(authors).into_response())
}

/// POST /author. Registers a new author.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterAuthorRequest>,
) -> ApiResult<(StatusCode, Json<Author>)> {
    let author = state.author_service.register(req).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// POST /author/login. Verifies credentials and issues a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.author_service.login(&req.email, &req.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// PUT /author/{id}. Ownership-scoped partial update.
pub async fn update(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAuthorRequest>,
) -> ApiResult<Json<Author>> {
    let author = state
        .author_service
        .update(&ctx, id, req)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found"))?;
    Ok(Json(author))
}

/// DELETE /author/{id}. Ownership-scoped; returns the deleted record.
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Author>> {
    let author = state
        .author_service
        .delete(&ctx, id)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found"))?;
    Ok(Json(author))
}

/// POST /author/image-upload. Multipart upload with `image` and `authorId`
/// fields; ownership is checked against the target author, not the caller.
pub async fn image_upload(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<Author>> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut author_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("image") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
                file = Some((file_name, data.to_vec()));
            }
            Some("authorId") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read field: {e}")))?;
                let id = text
                    .trim()
                    .parse()
                    .map_err(|_| AppError::validation("Field 'authorId' must be a valid UUID"))?;
                author_id = Some(id);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::validation("Multipart field 'image' is required"))?;
    let author_id =
        author_id.ok_or_else(|| AppError::validation("Multipart field 'authorId' is required"))?;

    let author = state
        .author_service
        .attach_image(&ctx, author_id, &state.config.uploads.dir, &file_name, &data)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found"))?;

    Ok(Json(author))
}

/// DELETE /author/reset. Reseeds the author collection.
pub async fn reset(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    state.seed_service.reseed_authors().await?;
    Ok(Json(MessageResponse {
        message: "Authors reseeded".to_string(),
    }))
}
