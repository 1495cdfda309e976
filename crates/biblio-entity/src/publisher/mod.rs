//! Publisher domain entities.

pub mod model;

pub use model::{CreatePublisher, Publisher};
