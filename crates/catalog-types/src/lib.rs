//! Catalog Types - Pure type definitions
//!
//! Plain data types shared by the scoring engine, the storage adapters and
//! the HTTP layer. No runtime or database dependencies live here.

pub mod item;
pub mod report;

pub use item::*;
pub use report::*;
