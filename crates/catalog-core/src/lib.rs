//! Catalog Core Library
//!
//! Domain logic for the tech catalog: error taxonomy, the storage port,
//! attribute validation and the scoring engine.

// Re-export pure types from catalog-types
pub use catalog_types::*;

pub mod error;
pub mod ports;
pub mod scoring;
pub mod validation;

pub use error::{CatalogError, Result};
pub use ports::ItemStore;
pub use scoring::{aggregate, score, CategoryWeight, ScoringConfig};
