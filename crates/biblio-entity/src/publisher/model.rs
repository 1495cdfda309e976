//! Publisher entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::country::Country;

/// A publishing house in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Publisher {
    /// Unique publisher identifier.
    pub id: Uuid,
    /// Publisher name.
    pub name: String,
    /// Country of registration.
    pub country: Country,
    /// When the publisher was created.
    pub created_at: DateTime<Utc>,
    /// When the publisher was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new publisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePublisher {
    /// Publisher name.
    pub name: String,
    /// Country of registration.
    pub country: Country,
}
