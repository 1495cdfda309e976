//! Biblio domain services.
//!
//! Services sit between the HTTP handlers and the repositories: they own
//! validation, authorization checks on ownership-scoped operations, and
//! the reseed/relink maintenance flow.

pub mod author;
pub mod book;
pub mod context;
pub mod publisher;
pub mod seed;

pub use context::RequestContext;
