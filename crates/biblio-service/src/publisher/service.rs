//! Publisher operations — CRUD and name search.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use biblio_core::error::AppError;
use biblio_core::result::AppResult;
use biblio_core::types::pagination::{PageRequest, PageResponse};
use biblio_database::repositories::book::BookRepository;
use biblio_database::repositories::publisher::PublisherRepository;
use biblio_entity::book::Book;
use biblio_entity::publisher::{CreatePublisher, Publisher};

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 20;

/// Data for creating a new publisher.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreatePublisherRequest {
    /// Publisher name.
    pub name: String,
    /// Country label from the allowed set.
    pub country: String,
}

/// Partial update of a publisher.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdatePublisherRequest {
    /// New publisher name.
    pub name: Option<String>,
    /// New country label.
    pub country: Option<String>,
}

/// Handles publisher CRUD.
#[derive(Debug, Clone)]
pub struct PublisherService {
    /// Publisher repository.
    publisher_repo: Arc<PublisherRepository>,
    /// Book repository (for populating a publisher's books).
    book_repo: Arc<BookRepository>,
}

impl PublisherService {
    /// Creates a new publisher service.
    pub fn new(publisher_repo: Arc<PublisherRepository>, book_repo: Arc<BookRepository>) -> Self {
        Self {
            publisher_repo,
            book_repo,
        }
    }

    /// Lists publishers with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Publisher>> {
        self.publisher_repo.find_all(page).await
    }

    /// Fetches one publisher, optionally with its books populated.
    pub async fn get(
        &self,
        id: Uuid,
        include_books: bool,
    ) -> AppResult<Option<(Publisher, Option<Vec<Book>>)>> {
        let Some(publisher) = self.publisher_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let books = if include_books {
            Some(self.book_repo.find_by_publisher(id).await?)
        } else {
            None
        };

        Ok(Some((publisher, books)))
    }

    /// Case-insensitive prefix search on the name.
    pub async fn search_by_name(&self, prefix: &str) -> AppResult<Vec<Publisher>> {
        self.publisher_repo.search_by_name_prefix(prefix).await
    }

    /// Creates a new publisher.
    pub async fn create(&self, req: CreatePublisherRequest) -> AppResult<Publisher> {
        validate_name(&req.name)?;
        let country = req.country.parse()?;

        let publisher = self
            .publisher_repo
            .create(&CreatePublisher {
                name: req.name.trim().to_string(),
                country,
            })
            .await?;

        info!(publisher_id = %publisher.id, "Publisher created");
        Ok(publisher)
    }

    /// Updates a publisher.
    pub async fn update(
        &self,
        id: Uuid,
        req: UpdatePublisherRequest,
    ) -> AppResult<Option<Publisher>> {
        let Some(mut publisher) = self.publisher_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(name) = req.name {
            validate_name(&name)?;
            publisher.name = name.trim().to_string();
        }
        if let Some(country) = req.country {
            publisher.country = country.parse()?;
        }

        let updated = self.publisher_repo.update(&publisher).await?;
        info!(publisher_id = %id, "Publisher updated");
        Ok(Some(updated))
    }

    /// Deletes a publisher, returning the deleted record.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Publisher>> {
        let deleted = self.publisher_repo.delete(id).await?;
        if deleted.is_some() {
            info!(publisher_id = %id, "Publisher deleted");
        }
        Ok(deleted)
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    let len = name.trim().chars().count();
    if len < NAME_MIN {
        return Err(AppError::validation(format!(
            "Name must have at least {NAME_MIN} characters"
        )));
    }
    if len > NAME_MAX {
        return Err(AppError::validation(format!(
            "Name must have at most {NAME_MAX} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("Ivy").is_ok());
        assert!(validate_name("Io").is_err());
        assert!(validate_name(&"x".repeat(20)).is_ok());
        assert!(validate_name(&"x".repeat(21)).is_err());
    }
}
