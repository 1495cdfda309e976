//! Response DTOs.

use serde::{Deserialize, Serialize};

use biblio_entity::author::Author;
use biblio_entity::book::Book;
use biblio_entity::publisher::Publisher;

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// An author, optionally with their books populated
/// (`?includeBooks=true`). The password digest is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    /// The author record.
    #[serde(flatten)]
    pub author: Author,
    /// Derived books, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<Book>>,
}

/// A publisher, optionally with its books populated.
#[derive(Debug, Clone, Serialize)]
pub struct PublisherResponse {
    /// The publisher record.
    #[serde(flatten)]
    pub publisher: Publisher,
    /// Derived books, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<Book>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_entity::country::Country;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_author_response_hides_password_hash() {
        let resp = AuthorResponse {
            author: Author {
                id: Uuid::new_v4(),
                email: "a@b.com".to_string(),
                password_hash: "$argon2id$secret".to_string(),
                name: "Ana".to_string(),
                country: Country::Spain,
                image: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            books: None,
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("books").is_none());
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["country"], "SPAIN");
    }
}
