//! Author service.

pub mod service;

pub use service::{AuthorService, RegisterAuthorRequest, UpdateAuthorRequest};
