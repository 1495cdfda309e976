//! Per-collection repositories.

pub mod author;
pub mod book;
pub mod publisher;

pub use author::AuthorRepository;
pub use book::BookRepository;
pub use publisher::PublisherRepository;
