//! JWT claims structure carried by every issued token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims payload.
///
/// Tokens are self-contained: verification needs only the signing secret,
/// no server-side session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the author ID.
    pub sub: Uuid,
    /// Subject email at the time of issuance.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the author ID from the subject claim.
    pub fn author_id(&self) -> Uuid {
        self.sub
    }
}
