//! Port definitions (traits for adapters)

pub mod storage;

pub use storage::ItemStore;
