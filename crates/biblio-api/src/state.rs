//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use biblio_auth::jwt::decoder::JwtDecoder;
use biblio_core::config::AppConfig;
use biblio_database::connection::DatabasePool;
use biblio_service::author::AuthorService;
use biblio_service::book::BookService;
use biblio_service::publisher::PublisherService;
use biblio_service::seed::SeedService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool (health checks).
    pub db: DatabasePool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Author service.
    pub author_service: Arc<AuthorService>,
    /// Book service.
    pub book_service: Arc<BookService>,
    /// Publisher service.
    pub publisher_service: Arc<PublisherService>,
    /// Reseed/relink service.
    pub seed_service: Arc<SeedService>,
}
