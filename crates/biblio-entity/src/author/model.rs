//! Author entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::country::Country;

/// A registered author — the principal that can authenticate.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Author {
    /// Unique author identifier.
    pub id: Uuid,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Argon2 password digest. Never serialized in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Country of origin.
    pub country: Country,
    /// Optional profile-image path.
    pub image: Option<String>,
    /// When the author was created.
    pub created_at: DateTime<Utc>,
    /// When the author was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new author. The password arrives pre-hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthor {
    /// Email address.
    pub email: String,
    /// Argon2 digest of the chosen password.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Country of origin.
    pub country: Country,
    /// Optional profile-image path.
    pub image: Option<String>,
}
