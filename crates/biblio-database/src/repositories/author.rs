//! Author repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use biblio_core::error::{AppError, ErrorKind};
use biblio_core::result::AppResult;
use biblio_core::types::pagination::{PageRequest, PageResponse};
use biblio_entity::author::{Author, CreateAuthor};

/// Repository for author CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    pool: PgPool,
}

impl AuthorRepository {
    /// Create a new author repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an author by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Author>> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find author by id", e)
            })
    }

    /// Find an author by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Author>> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find author by email", e)
            })
    }

    /// Find several authors by primary key.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Author>> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find authors by ids", e)
            })
    }

    /// List authors with pagination.
    ///
    /// Ordered by insertion so that page boundaries are stable between calls.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Author>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count authors", e))?;

        let authors = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list authors", e))?;

        Ok(PageResponse::new(authors, page, total as u64))
    }

    /// List every author, unpaginated (relink full scan).
    pub async fn find_all_unpaged(&self) -> AppResult<Vec<Author>> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list authors", e))
    }

    /// Search authors whose name starts with the given prefix, ignoring case.
    pub async fn search_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<Author>> {
        let pattern = format!("{}%", escape_like(prefix));

        sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE name ILIKE $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search authors", e))
    }

    /// Insert a new author.
    ///
    /// A duplicate email surfaces as a typed Conflict via the unique-violation
    /// error code, not by inspecting error text.
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "INSERT INTO authors (email, password_hash, name, country, image) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.name)
        .bind(data.country)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Email '{}' is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create author", e),
        })
    }

    /// Persist changes to an existing author.
    pub async fn update(&self, author: &Author) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "UPDATE authors \
             SET email = $2, password_hash = $3, name = $4, country = $5, image = $6, updated_at = $7 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(author.id)
        .bind(&author.email)
        .bind(&author.password_hash)
        .bind(&author.name)
        .bind(author.country)
        .bind(&author.image)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Email '{}' is already registered", author.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update author", e),
        })
    }

    /// Delete an author, returning the deleted row if it existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Author>> {
        sqlx::query_as::<_, Author>("DELETE FROM authors WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete author", e))
    }

    /// Delete every author. DELETE rather than TRUNCATE so that the weak
    /// book references are detached through ON DELETE SET NULL.
    pub async fn delete_all(&self) -> AppResult<u64> {
        sqlx::query("DELETE FROM authors")
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear authors", e))
    }
}

/// Escape LIKE metacharacters in user-supplied search text.
pub(crate) fn escape_like(input: &str) -> String {
    input.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("ana"), "ana");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
