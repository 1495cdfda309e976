//! Publisher repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use biblio_core::error::{AppError, ErrorKind};
use biblio_core::result::AppResult;
use biblio_core::types::pagination::{PageRequest, PageResponse};
use biblio_entity::publisher::{CreatePublisher, Publisher};

use super::author::escape_like;

/// Repository for publisher CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PublisherRepository {
    pool: PgPool,
}

impl PublisherRepository {
    /// Create a new publisher repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a publisher by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Publisher>> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find publisher by id", e)
            })
    }

    /// Find several publishers by primary key.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Publisher>> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find publishers by ids", e)
            })
    }

    /// List publishers with pagination, ordered by insertion.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Publisher>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM publishers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count publishers", e)
            })?;

        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list publishers", e))?;

        Ok(PageResponse::new(publishers, page, total as u64))
    }

    /// List every publisher, unpaginated (relink full scan).
    pub async fn find_all_unpaged(&self) -> AppResult<Vec<Publisher>> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list publishers", e))
    }

    /// Search publishers whose name starts with the given prefix, ignoring case.
    pub async fn search_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<Publisher>> {
        let pattern = format!("{}%", escape_like(prefix));

        sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE name ILIKE $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search publishers", e))
    }

    /// Insert a new publisher.
    pub async fn create(&self, data: &CreatePublisher) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (name, country) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.country)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create publisher", e))
    }

    /// Persist changes to an existing publisher.
    pub async fn update(&self, publisher: &Publisher) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET name = $2, country = $3, updated_at = $4 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(publisher.id)
        .bind(&publisher.name)
        .bind(publisher.country)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update publisher", e))
    }

    /// Delete a publisher, returning the deleted row if it existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Publisher>> {
        sqlx::query_as::<_, Publisher>("DELETE FROM publishers WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete publisher", e)
            })
    }

    /// Delete every publisher.
    pub async fn delete_all(&self) -> AppResult<u64> {
        sqlx::query("DELETE FROM publishers")
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear publishers", e)
            })
    }
}
