//! Storage layer
//!
//! SQLite (embedded) is the default backend. A DashMap-backed store serves
//! as a non-persistent alternative and as the test double.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryItemStore;

use catalog_core::CatalogError;

pub(crate) fn db_err(e: sqlx::Error) -> CatalogError {
    CatalogError::Database(e.to_string())
}
