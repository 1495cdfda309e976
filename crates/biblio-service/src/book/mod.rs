//! Book service.

pub mod service;

pub use service::{BookService, CreateBookRequest, PopulatedBook, UpdateBookRequest};
