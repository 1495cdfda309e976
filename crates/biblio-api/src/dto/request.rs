//! Request DTOs and query-parameter shapes.

use serde::{Deserialize, Serialize};

/// POST /author/login body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Raw pagination query parameters, validated into a `PageRequest`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// Items per page; required, positive.
    pub limit: Option<i64>,
    /// Page number; required, positive, 1-based.
    pub page: Option<i64>,
}

/// `includeBooks` query flag on single-resource fetches.
#[derive(Debug, Clone, Deserialize)]
pub struct IncludeBooksQuery {
    /// Populate the derived books field when true.
    #[serde(default, rename = "includeBooks")]
    pub include_books: bool,
}

/// `all` query flag on the book reset endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetQuery {
    /// Reset every collection and relink when true.
    #[serde(default)]
    pub all: bool,
}
