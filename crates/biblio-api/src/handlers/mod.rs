//! HTTP request handlers.

pub mod author;
pub mod book;
pub mod health;
pub mod publisher;
