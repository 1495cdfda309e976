//! Ownership-scoped authorization guard.

use uuid::Uuid;

use biblio_core::config::auth::AuthConfig;
use biblio_core::error::AppError;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The caller may act on the target resource.
    Allow,
    /// The caller may not act on the target resource.
    Deny,
}

/// Decides whether a verified identity may act on a target resource.
///
/// Pure decision over two identifiers plus the configured admin marker;
/// evaluated strictly after token verification, never for anonymous routes.
#[derive(Debug, Clone)]
pub struct OwnershipGuard {
    /// Email of the administrative identity.
    admin_email: String,
}

impl OwnershipGuard {
    /// Creates a new guard from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
        }
    }

    /// Allow when the subject owns the target resource or is the admin.
    pub fn authorize(&self, subject_id: Uuid, subject_email: &str, owner_id: Uuid) -> Decision {
        if subject_id == owner_id || subject_email.eq_ignore_ascii_case(&self.admin_email) {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }

    /// Like [`authorize`](Self::authorize), but surfaces Deny as an
    /// Unauthorized error for `?` propagation. Deny is never downgraded
    /// to a not-found outcome.
    pub fn require(&self, subject_id: Uuid, subject_email: &str, owner_id: Uuid) -> Result<(), AppError> {
        match self.authorize(subject_id, subject_email, owner_id) {
            Decision::Allow => Ok(()),
            Decision::Deny => Err(AppError::unauthorized(
                "You are not allowed to perform this operation",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> OwnershipGuard {
        OwnershipGuard {
            admin_email: "admin@gmail.com".to_string(),
        }
    }

    #[test]
    fn test_owner_non_admin_allowed() {
        let id = Uuid::new_v4();
        assert_eq!(guard().authorize(id, "a@b.com", id), Decision::Allow);
    }

    #[test]
    fn test_non_owner_admin_allowed() {
        let g = guard();
        assert_eq!(
            g.authorize(Uuid::new_v4(), "admin@gmail.com", Uuid::new_v4()),
            Decision::Allow
        );
        // Admin match ignores case.
        assert_eq!(
            g.authorize(Uuid::new_v4(), "Admin@Gmail.com", Uuid::new_v4()),
            Decision::Allow
        );
    }

    #[test]
    fn test_owner_admin_allowed() {
        let id = Uuid::new_v4();
        assert_eq!(guard().authorize(id, "admin@gmail.com", id), Decision::Allow);
    }

    #[test]
    fn test_non_owner_non_admin_denied() {
        assert_eq!(
            guard().authorize(Uuid::new_v4(), "a@b.com", Uuid::new_v4()),
            Decision::Deny
        );
    }

    #[test]
    fn test_require_maps_deny_to_unauthorized() {
        let err = guard()
            .require(Uuid::new_v4(), "a@b.com", Uuid::new_v4())
            .unwrap_err();
        assert_eq!(err.kind, biblio_core::ErrorKind::Unauthorized);
    }
}
