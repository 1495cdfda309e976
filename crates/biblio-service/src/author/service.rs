//! Author operations — registration, login, ownership-scoped mutation,
//! and image attachment.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use biblio_auth::guard::OwnershipGuard;
use biblio_auth::jwt::encoder::JwtEncoder;
use biblio_auth::password::PasswordHasher;
use biblio_core::config::auth::AuthConfig;
use biblio_core::error::AppError;
use biblio_core::result::AppResult;
use biblio_core::types::pagination::{PageRequest, PageResponse};
use biblio_database::repositories::author::AuthorRepository;
use biblio_database::repositories::book::BookRepository;
use biblio_entity::author::{Author, CreateAuthor};
use biblio_entity::book::Book;
use biblio_entity::country::Country;

use crate::context::RequestContext;

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 22;

/// Data for registering a new author.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterAuthorRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
    /// Display name.
    pub name: String,
    /// Country label from the allowed set.
    pub country: String,
    /// Optional profile-image path.
    pub image: Option<String>,
}

/// Partial update of an author. Absent fields are left untouched; the
/// password digest is replaced only when a new plaintext is supplied.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateAuthorRequest {
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New country label.
    pub country: Option<String>,
    /// New profile-image path.
    pub image: Option<String>,
}

/// Handles author lifecycle and credential operations.
#[derive(Debug, Clone)]
pub struct AuthorService {
    /// Author repository.
    author_repo: Arc<AuthorRepository>,
    /// Book repository (for populating an author's books).
    book_repo: Arc<BookRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
    /// Ownership-or-admin guard.
    guard: Arc<OwnershipGuard>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(
        author_repo: Arc<AuthorRepository>,
        book_repo: Arc<BookRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        guard: Arc<OwnershipGuard>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
            hasher,
            encoder,
            guard,
            password_min_length: config.password_min_length,
        }
    }

    /// Registers a new author. The plaintext password is hashed exactly
    /// once; a duplicate email surfaces as a Conflict from the repository.
    pub async fn register(&self, req: RegisterAuthorRequest) -> AppResult<Author> {
        validate_email(&req.email)?;
        self.validate_password(&req.password)?;
        validate_name(&req.name)?;
        let country: Country = req.country.parse()?;

        let password_hash = self.hasher.hash_password(&req.password)?;

        let author = self
            .author_repo
            .create(&CreateAuthor {
                email: req.email.trim().to_string(),
                password_hash,
                name: req.name.trim().to_string(),
                country,
                image: req.image,
            })
            .await?;

        info!(author_id = %author.id, "Author registered");
        Ok(author)
    }

    /// Verifies a credential pair and issues a bearer token.
    ///
    /// A missing author and a wrong password produce the same Unauthorized
    /// outcome so the response does not leak which half was wrong.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation(
                "Fields 'email' and 'password' are required",
            ));
        }

        let author = self
            .author_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Incorrect email and/or password"))?;

        let matches = self
            .hasher
            .verify_password(password, &author.password_hash)?;
        if !matches {
            return Err(AppError::unauthorized("Incorrect email and/or password"));
        }

        let token = self.encoder.issue(author.id, &author.email)?;
        info!(author_id = %author.id, "Author logged in");
        Ok(token)
    }

    /// Lists authors with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Author>> {
        self.author_repo.find_all(page).await
    }

    /// Fetches one author, optionally with their books populated.
    pub async fn get(
        &self,
        id: Uuid,
        include_books: bool,
    ) -> AppResult<Option<(Author, Option<Vec<Book>>)>> {
        let Some(author) = self.author_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let books = if include_books {
            Some(self.book_repo.find_by_author(id).await?)
        } else {
            None
        };

        Ok(Some((author, books)))
    }

    /// Case-insensitive prefix search on the display name.
    pub async fn search_by_name(&self, prefix: &str) -> AppResult<Vec<Author>> {
        self.author_repo.search_by_name_prefix(prefix).await
    }

    /// Updates an author. Ownership-scoped: the caller must be the target
    /// author or the admin. Re-hashes only when a new password arrives, so
    /// re-saving without touching the password keeps the digest unchanged.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: UpdateAuthorRequest,
    ) -> AppResult<Option<Author>> {
        self.guard.require(ctx.author_id, &ctx.email, id)?;

        let Some(mut author) = self.author_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(email) = req.email {
            validate_email(&email)?;
            author.email = email.trim().to_string();
        }
        if let Some(password) = req.password {
            self.validate_password(&password)?;
            author.password_hash = self.hasher.hash_password(&password)?;
        }
        if let Some(name) = req.name {
            validate_name(&name)?;
            author.name = name.trim().to_string();
        }
        if let Some(country) = req.country {
            author.country = country.parse()?;
        }
        if let Some(image) = req.image {
            author.image = Some(image);
        }

        let updated = self.author_repo.update(&author).await?;
        info!(author_id = %id, "Author updated");
        Ok(Some(updated))
    }

    /// Deletes an author. Ownership-scoped. Returns the deleted record.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Option<Author>> {
        self.guard.require(ctx.author_id, &ctx.email, id)?;

        let deleted = self.author_repo.delete(id).await?;
        if deleted.is_some() {
            info!(author_id = %id, "Author deleted");
        }
        Ok(deleted)
    }

    /// Stores an uploaded image and attaches it to the target author.
    /// Ownership-scoped against the target author, not the route.
    pub async fn attach_image(
        &self,
        ctx: &RequestContext,
        author_id: Uuid,
        upload_dir: &str,
        file_name: &str,
        data: &[u8],
    ) -> AppResult<Option<Author>> {
        self.guard.require(ctx.author_id, &ctx.email, author_id)?;

        let Some(mut author) = self.author_repo.find_by_id(author_id).await? else {
            return Ok(None);
        };

        let safe_name = sanitize_file_name(file_name);
        let stored_path = format!("{}/{}_{}", upload_dir, Uuid::new_v4(), safe_name);

        if let Some(parent) = Path::new(&stored_path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&stored_path, data).await?;

        author.image = Some(stored_path.clone());
        let updated = self.author_repo.update(&author).await?;
        info!(author_id = %author_id, path = %stored_path, "Author image attached");
        Ok(Some(updated))
    }

    fn validate_password(&self, password: &str) -> AppResult<()> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> AppResult<()> {
    let email = email.trim();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !well_formed {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(())
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

/// Strip path separators from a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("  a@b.com  ").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@nodot").is_err());
    }

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("Ana").is_ok());
        assert!(validate_name("Al").is_err());
        assert!(validate_name(&"x".repeat(22)).is_ok());
        assert!(validate_name(&"x".repeat(23)).is_err());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("photo.png"), "photo.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
    }
}
