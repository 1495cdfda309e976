//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Loaded once at startup and injected into the token encoder/decoder and
/// the ownership guard; never read from ambient global state. Rotating
/// `jwt_secret` invalidates every previously issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token TTL in hours. Tokens expire; see DESIGN.md for the policy.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Email of the administrative identity that may act on any author.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_admin_email() -> String {
    "admin@gmail.com".to_string()
}

fn default_password_min() -> usize {
    8
}
