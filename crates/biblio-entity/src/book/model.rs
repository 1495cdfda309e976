//! Book entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A book in the catalog.
///
/// Author and publisher references are weak: they are looked up by id when
/// responses are populated and reassignable at any time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    /// Unique book identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Page count.
    pub pages: i32,
    /// Owning author, if any.
    pub author_id: Option<Uuid>,
    /// Owning publisher, if any.
    pub publisher_id: Option<Uuid>,
    /// When the book was created.
    pub created_at: DateTime<Utc>,
    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    /// Title.
    pub title: String,
    /// Page count.
    pub pages: i32,
    /// Owning author, if any.
    pub author_id: Option<Uuid>,
    /// Owning publisher, if any.
    pub publisher_id: Option<Uuid>,
}
