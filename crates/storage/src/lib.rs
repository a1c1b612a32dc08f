//! Storage layer for stronghold
//!
//! PostgreSQL-backed set and card records, with an in-memory store behind the
//! same trait for development and tests.

mod backend;
mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::SetStore;
