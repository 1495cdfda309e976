//! Reseed and relink maintenance.

pub mod dataset;
pub mod service;

pub use service::SeedService;
