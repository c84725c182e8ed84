//! In-memory item store using DashMap (no persistence)

use async_trait::async_trait;
use catalog_core::{Item, ItemStore, NewItem, Result};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Non-persistent item store.
///
/// Individual operations go straight to the map. `replace_all` takes the
/// gate exclusively so no reader sees a half-replaced catalog.
pub struct MemoryItemStore {
    items: DashMap<i64, Item>,
    next_id: AtomicI64,
    gate: RwLock<()>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
            gate: RwLock::new(()),
        }
    }

    fn sorted(&self, category: Option<&str>) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|entry| category.map_or(true, |c| entry.category == c))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: &NewItem) -> Result<Item> {
        let _guard = self.gate.read().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Item::from_new(id, item.clone());
        self.items.insert(id, created.clone());
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Option<Item>> {
        let _guard = self.gate.read().await;
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Item>> {
        let _guard = self.gate.read().await;
        Ok(self.sorted(category))
    }

    async fn update(&self, id: i64, item: &NewItem) -> Result<Option<Item>> {
        let _guard = self.gate.read().await;
        Ok(self.items.get_mut(&id).map(|mut entry| {
            *entry = Item::from_new(id, item.clone());
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let _guard = self.gate.read().await;
        Ok(self.items.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64> {
        let _guard = self.gate.read().await;
        Ok(self.items.len() as u64)
    }

    async fn replace_all(&self, items: &[NewItem]) -> Result<Vec<Item>> {
        let _guard = self.gate.write().await;
        self.items.clear();
        self.next_id.store(1, Ordering::SeqCst);

        let inserted: Vec<Item> = items
            .iter()
            .map(|attrs| {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let item = Item::from_new(id, attrs.clone());
                self.items.insert(id, item.clone());
                item
            })
            .collect();

        Ok(inserted)
    }
}
