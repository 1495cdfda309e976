//! Book operations — CRUD, title search, and reference population.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use biblio_core::error::AppError;
use biblio_core::result::AppResult;
use biblio_core::types::pagination::{PageRequest, PageResponse};
use biblio_database::repositories::author::AuthorRepository;
use biblio_database::repositories::book::BookRepository;
use biblio_database::repositories::publisher::PublisherRepository;
use biblio_entity::author::Author;
use biblio_entity::book::{Book, CreateBook};
use biblio_entity::publisher::Publisher;

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 40;
const PAGES_MIN: i32 = 1;
const PAGES_MAX: i32 = 1500;

/// Data for creating a new book.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateBookRequest {
    /// Title.
    pub title: String,
    /// Page count.
    pub pages: i32,
    /// Owning author, if any.
    pub author_id: Option<Uuid>,
    /// Owning publisher, if any.
    pub publisher_id: Option<Uuid>,
}

/// Partial update of a book.
///
/// The weak references are double-wrapped so the three wire states stay
/// distinct: an absent field leaves the reference untouched, an explicit
/// `null` detaches it, and a value reassigns it.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateBookRequest {
    /// New title.
    pub title: Option<String>,
    /// New page count.
    pub pages: Option<i32>,
    /// New owning author; `null` detaches the current one.
    #[serde(default, deserialize_with = "nullable_reference")]
    pub author_id: Option<Option<Uuid>>,
    /// New owning publisher; `null` detaches the current one.
    #[serde(default, deserialize_with = "nullable_reference")]
    pub publisher_id: Option<Option<Uuid>>,
}

/// Keeps a present-but-null field distinct from an absent one, which the
/// stock `Option` deserializer collapses.
fn nullable_reference<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// A book with its weak references resolved for the response.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PopulatedBook {
    /// Unique book identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Page count.
    pub pages: i32,
    /// Resolved author, if referenced and still present.
    pub author: Option<Author>,
    /// Resolved publisher, if referenced and still present.
    pub publisher: Option<Publisher>,
    /// When the book was created.
    pub created_at: DateTime<Utc>,
    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Handles book CRUD and reference population.
#[derive(Debug, Clone)]
pub struct BookService {
    /// Book repository.
    book_repo: Arc<BookRepository>,
    /// Author repository (reference population).
    author_repo: Arc<AuthorRepository>,
    /// Publisher repository (reference population).
    publisher_repo: Arc<PublisherRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(
        book_repo: Arc<BookRepository>,
        author_repo: Arc<AuthorRepository>,
        publisher_repo: Arc<PublisherRepository>,
    ) -> Self {
        Self {
            book_repo,
            author_repo,
            publisher_repo,
        }
    }

    /// Lists books with pagination, references populated.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<PopulatedBook>> {
        let books = self.book_repo.find_all(page).await?;
        let current_page = page.page;
        let total_items = books.total_items;
        let total_pages = books.total_pages;
        let data = self.populate(books.data).await?;
        Ok(PageResponse {
            total_items,
            total_pages,
            current_page,
            data,
        })
    }

    /// Fetches one book with references populated.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<PopulatedBook>> {
        let Some(book) = self.book_repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let mut populated = self.populate(vec![book]).await?;
        Ok(populated.pop())
    }

    /// Case-insensitive prefix search on the title, references populated.
    pub async fn search_by_title(&self, prefix: &str) -> AppResult<Vec<PopulatedBook>> {
        let books = self.book_repo.search_by_title_prefix(prefix).await?;
        self.populate(books).await
    }

    /// Creates a new book.
    pub async fn create(&self, req: CreateBookRequest) -> AppResult<Book> {
        validate_title(&req.title)?;
        validate_pages(req.pages)?;

        let book = self
            .book_repo
            .create(&CreateBook {
                title: req.title.trim().to_string(),
                pages: req.pages,
                author_id: req.author_id,
                publisher_id: req.publisher_id,
            })
            .await?;

        info!(book_id = %book.id, "Book created");
        Ok(book)
    }

    /// Updates a book. Last write wins; no optimistic-concurrency check.
    pub async fn update(&self, id: Uuid, req: UpdateBookRequest) -> AppResult<Option<Book>> {
        let Some(mut book) = self.book_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(title) = req.title {
            validate_title(&title)?;
            book.title = title.trim().to_string();
        }
        if let Some(pages) = req.pages {
            validate_pages(pages)?;
            book.pages = pages;
        }
        if let Some(author_id) = req.author_id {
            book.author_id = author_id;
        }
        if let Some(publisher_id) = req.publisher_id {
            book.publisher_id = publisher_id;
        }

        let updated = self.book_repo.update(&book).await?;
        info!(book_id = %id, "Book updated");
        Ok(Some(updated))
    }

    /// Deletes a book, returning the deleted record.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Book>> {
        let deleted = self.book_repo.delete(id).await?;
        if deleted.is_some() {
            info!(book_id = %id, "Book deleted");
        }
        Ok(deleted)
    }

    /// Resolve author/publisher references with one batched read each.
    async fn populate(&self, books: Vec<Book>) -> AppResult<Vec<PopulatedBook>> {
        let author_ids: Vec<Uuid> = books.iter().filter_map(|b| b.author_id).collect();
        let publisher_ids: Vec<Uuid> = books.iter().filter_map(|b| b.publisher_id).collect();

        let authors: HashMap<Uuid, Author> = if author_ids.is_empty() {
            HashMap::new()
        } else {
            self.author_repo
                .find_by_ids(&author_ids)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect()
        };

        let publishers: HashMap<Uuid, Publisher> = if publisher_ids.is_empty() {
            HashMap::new()
        } else {
            self.publisher_repo
                .find_by_ids(&publisher_ids)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        Ok(books
            .into_iter()
            .map(|book| PopulatedBook {
                id: book.id,
                title: book.title,
                pages: book.pages,
                author: book.author_id.and_then(|id| authors.get(&id).cloned()),
                publisher: book.publisher_id.and_then(|id| publishers.get(&id).cloned()),
                created_at: book.created_at,
                updated_at: book.updated_at,
            })
            .collect())
    }
}

fn validate_title(title: &str) -> AppResult<()> {
    let len = title.trim().chars().count();
    if len < TITLE_MIN {
        return Err(AppError::validation(format!(
            "Title must have at least {TITLE_MIN} characters"
        )));
    }
    if len > TITLE_MAX {
        return Err(AppError::validation(format!(
            "Title must have at most {TITLE_MAX} characters"
        )));
    }
    Ok(())
}

fn validate_pages(pages: i32) -> AppResult<()> {
    if !(PAGES_MIN..=PAGES_MAX).contains(&pages) {
        return Err(AppError::validation(format!(
            "Pages must be between {PAGES_MIN} and {PAGES_MAX}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_bounds() {
        assert!(validate_title("Rex").is_ok());
        assert!(validate_title("Ka").is_err());
        assert!(validate_title(&"x".repeat(40)).is_ok());
        assert!(validate_title(&"x".repeat(41)).is_err());
    }

    #[test]
    fn test_update_request_keeps_absent_null_and_value_distinct() {
        let absent: UpdateBookRequest = serde_json::from_str(r#"{"pages": 100}"#).unwrap();
        assert_eq!(absent.author_id, None);

        let detach: UpdateBookRequest = serde_json::from_str(r#"{"author_id": null}"#).unwrap();
        assert_eq!(detach.author_id, Some(None));

        let id = Uuid::new_v4();
        let body = format!(r#"{{"publisher_id": "{id}"}}"#);
        let reassign: UpdateBookRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(reassign.publisher_id, Some(Some(id)));
    }

    #[test]
    fn test_validate_pages_bounds() {
        assert!(validate_pages(1).is_ok());
        assert!(validate_pages(1500).is_ok());
        assert!(validate_pages(0).is_err());
        assert!(validate_pages(1501).is_err());
        assert!(validate_pages(-10).is_err());
    }
}
