//! Book repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use biblio_core::error::{AppError, ErrorKind};
use biblio_core::result::AppResult;
use biblio_core::types::pagination::{PageRequest, PageResponse};
use biblio_entity::book::{Book, CreateBook};

use super::author::escape_like;

/// Repository for book CRUD and query operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Create a new book repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a book by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find book by id", e))
    }

    /// List books with pagination, ordered by insertion.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Book>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count books", e))?;

        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list books", e))?;

        Ok(PageResponse::new(books, page, total as u64))
    }

    /// List every book, unpaginated (relink full scan).
    pub async fn find_all_unpaged(&self) -> AppResult<Vec<Book>> {
        sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list books", e))
    }

    /// List books owned by the given author.
    pub async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list author books", e))
    }

    /// List books owned by the given publisher.
    pub async fn find_by_publisher(&self, publisher_id: Uuid) -> AppResult<Vec<Book>> {
        sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE publisher_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(publisher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list publisher books", e)
        })
    }

    /// Search books whose title starts with the given prefix, ignoring case.
    pub async fn search_by_title_prefix(&self, prefix: &str) -> AppResult<Vec<Book>> {
        let pattern = format!("{}%", escape_like(prefix));

        sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE title ILIKE $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search books", e))
    }

    /// Insert a new book.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, pages, author_id, publisher_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(data.pages)
        .bind(data.author_id)
        .bind(data.publisher_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create book", e))
    }

    /// Persist changes to an existing book.
    pub async fn update(&self, book: &Book) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "UPDATE books \
             SET title = $2, pages = $3, author_id = $4, publisher_id = $5, updated_at = $6 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(book.pages)
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update book", e))
    }

    /// Delete a book, returning the deleted row if it existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Book>> {
        sqlx::query_as::<_, Book>("DELETE FROM books WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete book", e))
    }

    /// Delete every book.
    pub async fn delete_all(&self) -> AppResult<u64> {
        sqlx::query("DELETE FROM books")
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear books", e))
    }
}
