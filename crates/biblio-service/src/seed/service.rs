//! Destructive reseed and relink operations.
//!
//! These run only behind the explicit reset endpoints, never as a side
//! effect of normal CRUD. Relink is not transactional across the batch:
//! a failure partway leaves some books relinked and others not, and a
//! re-run overwrites every link again. See DESIGN.md for the upgrade
//! path to a batch transaction.

use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use biblio_auth::password::PasswordHasher;
use biblio_core::error::AppError;
use biblio_core::result::AppResult;
use biblio_database::repositories::author::AuthorRepository;
use biblio_database::repositories::book::BookRepository;
use biblio_database::repositories::publisher::PublisherRepository;
use biblio_entity::author::CreateAuthor;
use biblio_entity::book::CreateBook;
use biblio_entity::publisher::CreatePublisher;

use super::dataset::{SEED_AUTHORS, SEED_BOOKS, SEED_PUBLISHERS};

/// Reseeds collections from the built-in datasets and rebuilds the
/// random author/publisher links between them.
#[derive(Debug, Clone)]
pub struct SeedService {
    /// Author repository.
    author_repo: Arc<AuthorRepository>,
    /// Book repository.
    book_repo: Arc<BookRepository>,
    /// Publisher repository.
    publisher_repo: Arc<PublisherRepository>,
    /// Password hasher for seed author credentials.
    hasher: Arc<PasswordHasher>,
}

impl SeedService {
    /// Creates a new seed service.
    pub fn new(
        author_repo: Arc<AuthorRepository>,
        book_repo: Arc<BookRepository>,
        publisher_repo: Arc<PublisherRepository>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
            publisher_repo,
            hasher,
        }
    }

    /// Truncates the author collection and repopulates it from the
    /// built-in dataset, hashing each seed password.
    pub async fn reseed_authors(&self) -> AppResult<()> {
        let removed = self.author_repo.delete_all().await?;
        for (email, password, name, country) in SEED_AUTHORS {
            let password_hash = self.hasher.hash_password(password)?;
            self.author_repo
                .create(&CreateAuthor {
                    email: (*email).to_string(),
                    password_hash,
                    name: (*name).to_string(),
                    country: *country,
                    image: None,
                })
                .await?;
        }
        info!(removed, seeded = SEED_AUTHORS.len(), "Authors reseeded");
        Ok(())
    }

    /// Truncates the book collection and repopulates it. Seeded books
    /// start with no author or publisher; relink assigns them.
    pub async fn reseed_books(&self) -> AppResult<()> {
        let removed = self.book_repo.delete_all().await?;
        for (title, pages) in SEED_BOOKS {
            self.book_repo
                .create(&CreateBook {
                    title: (*title).to_string(),
                    pages: *pages,
                    author_id: None,
                    publisher_id: None,
                })
                .await?;
        }
        info!(removed, seeded = SEED_BOOKS.len(), "Books reseeded");
        Ok(())
    }

    /// Truncates the publisher collection and repopulates it.
    pub async fn reseed_publishers(&self) -> AppResult<()> {
        let removed = self.publisher_repo.delete_all().await?;
        for (name, country) in SEED_PUBLISHERS {
            self.publisher_repo
                .create(&CreatePublisher {
                    name: (*name).to_string(),
                    country: *country,
                })
                .await?;
        }
        info!(removed, seeded = SEED_PUBLISHERS.len(), "Publishers reseeded");
        Ok(())
    }

    /// Assigns every book a uniformly random author and publisher from the
    /// currently loaded sets, persisting each book individually.
    ///
    /// Aborts before any write if one of the three collections is empty:
    /// partial linkage is treated as worse than no linkage.
    pub async fn relink(&self) -> AppResult<()> {
        let books = self.book_repo.find_all_unpaged().await?;
        let authors = self.author_repo.find_all_unpaged().await?;
        let publishers = self.publisher_repo.find_all_unpaged().await?;

        check_populated(books.len(), authors.len(), publishers.len())?;

        for mut book in books {
            // ThreadRng is not Send, so it must not live across the awaited
            // update below; sample both indices in a scope that drops it.
            let (author_idx, publisher_idx) = {
                let mut rng = rand::rng();
                (
                    rng.random_range(0..authors.len()),
                    rng.random_range(0..publishers.len()),
                )
            };
            let author = &authors[author_idx];
            let publisher = &publishers[publisher_idx];
            book.author_id = Some(author.id);
            book.publisher_id = Some(publisher.id);
            self.book_repo.update(&book).await?;
        }

        info!("Book relations rebuilt");
        Ok(())
    }

    /// Full reset: reseed books, authors, and publishers, then relink.
    /// The order is fixed because relink requires all three populated.
    pub async fn reset_all(&self) -> AppResult<()> {
        warn!("Resetting all collections to seed data");
        self.reseed_books().await?;
        self.reseed_authors().await?;
        self.reseed_publishers().await?;
        self.relink().await
    }
}

/// Relink precondition: every collection must be non-empty, and the error
/// names the specific one that is not.
fn check_populated(books: usize, authors: usize, publishers: usize) -> AppResult<()> {
    if books == 0 {
        return Err(AppError::conflict("Cannot relink: no books in the database"));
    }
    if authors == 0 {
        return Err(AppError::conflict(
            "Cannot relink: no authors in the database",
        ));
    }
    if publishers == 0 {
        return Err(AppError::conflict(
            "Cannot relink: no publishers in the database",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_populated_accepts_non_empty() {
        assert!(check_populated(3, 2, 1).is_ok());
    }

    #[test]
    fn test_check_populated_names_missing_collection() {
        let err = check_populated(0, 2, 1).unwrap_err();
        assert!(err.message.contains("books"));
        let err = check_populated(3, 0, 1).unwrap_err();
        assert!(err.message.contains("authors"));
        let err = check_populated(3, 2, 0).unwrap_err();
        assert!(err.message.contains("publishers"));
    }
}
