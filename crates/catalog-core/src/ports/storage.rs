//! Storage trait for item persistence

use crate::Result;
use async_trait::async_trait;
use catalog_types::{Item, NewItem};

/// Item store
///
/// Implementations assign ids on create, monotonically increasing, and
/// return listings ordered by id. Missing rows are reported as `None` or
/// `false`; mapping them to `ItemNotFound` is the caller's job.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn create(&self, item: &NewItem) -> Result<Item>;
    async fn get(&self, id: i64) -> Result<Option<Item>>;
    async fn list(&self, category: Option<&str>) -> Result<Vec<Item>>;
    async fn update(&self, id: i64, item: &NewItem) -> Result<Option<Item>>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn count(&self) -> Result<u64>;

    /// Atomically drop every item, restart id assignment and insert `items`.
    async fn replace_all(&self, items: &[NewItem]) -> Result<Vec<Item>>;
}
