//! Biblio domain entities.

pub mod author;
pub mod book;
pub mod country;
pub mod publisher;

pub use author::Author;
pub use book::Book;
pub use country::Country;
pub use publisher::Publisher;
