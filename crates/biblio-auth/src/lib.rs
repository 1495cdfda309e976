//! Biblio credential and authorization subsystem.
//!
//! Three independent pieces: Argon2id password hashing, stateless JWT
//! issuance/verification, and the ownership-or-admin authorization guard.
//! All configuration (signing secret, admin identity) is injected at
//! construction from [`biblio_core::config::auth::AuthConfig`].

pub mod guard;
pub mod jwt;
pub mod password;

pub use guard::{Decision, OwnershipGuard};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
