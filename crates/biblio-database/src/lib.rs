//! Biblio database layer — connection pool management, migrations, and
//! per-collection repositories.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
