//! Publisher service.

pub mod service;

pub use service::{CreatePublisherRequest, PublisherService, UpdatePublisherRequest};
