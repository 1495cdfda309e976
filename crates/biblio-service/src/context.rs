//! Verified caller identity passed into ownership-scoped operations.

use uuid::Uuid;

use biblio_auth::Claims;

/// Identity extracted from a verified bearer token.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated author's id.
    pub author_id: Uuid,
    /// The authenticated author's email at token issuance.
    pub email: String,
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self {
            author_id: claims.author_id(),
            email: claims.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_carries_claims_identity() {
        let id = Uuid::new_v4();
        let ctx = RequestContext::from(Claims {
            sub: id,
            email: "a@b.com".to_string(),
            iat: 0,
            exp: 1,
        });
        assert_eq!(ctx.author_id, id);
        assert_eq!(ctx.email, "a@b.com");
    }
}
