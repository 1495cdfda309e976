//! Biblio core — shared error types, configuration schemas, and pagination
//! primitives used by every other crate in the workspace.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
