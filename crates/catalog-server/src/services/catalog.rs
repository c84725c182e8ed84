//! Catalog service: item CRUD and score processing

use super::seeder;
use catalog_core::validation::{validate_item, validate_top_n};
use catalog_core::{
    aggregate, AggregateReport, CatalogError, Item, ItemStore, NewItem, Result, ScoringConfig,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct CatalogService {
    store: Arc<dyn ItemStore>,
    scoring: ScoringConfig,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ItemStore>, scoring: ScoringConfig) -> Self {
        Self { store, scoring }
    }

    pub async fn create_item(&self, attrs: &NewItem) -> Result<Item> {
        validate_item(attrs)?;
        let item = self.store.create(attrs).await?;
        info!(
            "Created item: id={}, name={}, category={}",
            item.id, item.name, item.category
        );
        Ok(item)
    }

    pub async fn get_item(&self, id: i64) -> Result<Item> {
        self.store
            .get(id)
            .await?
            .ok_or(CatalogError::ItemNotFound(id))
    }

    pub async fn list_items(&self, category: Option<&str>) -> Result<Vec<Item>> {
        self.store.list(non_empty(category)).await
    }

    pub async fn update_item(&self, id: i64, attrs: &NewItem) -> Result<Item> {
        validate_item(attrs)?;
        let item = self
            .store
            .update(id, attrs)
            .await?
            .ok_or(CatalogError::ItemNotFound(id))?;
        info!("Updated item: id={}", id);
        Ok(item)
    }

    pub async fn delete_item(&self, id: i64) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(CatalogError::ItemNotFound(id));
        }
        info!("Deleted item: id={}", id);
        Ok(())
    }

    /// Score, rank and summarize items, optionally restricted to one category.
    pub async fn process(
        &self,
        category: Option<&str>,
        top_n: Option<usize>,
    ) -> Result<AggregateReport> {
        let top_n = top_n.unwrap_or(self.scoring.default_top_n);
        validate_top_n(top_n)?;

        let category = non_empty(category);
        let items = self.store.list(category).await?;
        debug!(
            "Processing {} items: category={:?}, top_n={}",
            items.len(),
            category,
            top_n
        );

        Ok(aggregate(items, category, top_n, &self.scoring))
    }

    /// Clear the store and reinsert the sample catalog.
    pub async fn reset(&self) -> Result<Vec<Item>> {
        let items = seeder::reseed(self.store.as_ref()).await?;
        info!("Store reset: {} items reseeded", items.len());
        Ok(items)
    }
}

fn non_empty(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryItemStore;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryItemStore::new()), ScoringConfig::default())
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_attributes() {
        let store = Arc::new(MemoryItemStore::new());
        let svc = CatalogService::new(store.clone(), ScoringConfig::default());
        let err = svc
            .create_item(&NewItem::new("Widget", "gadgets", -5.0, 3))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation { ref field, .. } if field == "value"));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let svc = service();
        let attrs = NewItem::new("Widget", "gadgets", 10.0, 4);

        assert!(matches!(
            svc.get_item(5).await,
            Err(CatalogError::ItemNotFound(5))
        ));
        assert!(matches!(
            svc.update_item(5, &attrs).await,
            Err(CatalogError::ItemNotFound(5))
        ));
        assert!(matches!(
            svc.delete_item(5).await,
            Err(CatalogError::ItemNotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_process_uses_configured_default_top_n() {
        let store = Arc::new(MemoryItemStore::new());
        seeder::seed_if_empty(store.as_ref()).await.unwrap();
        let svc = CatalogService::new(
            store,
            ScoringConfig {
                default_top_n: 2,
                ..ScoringConfig::default()
            },
        );

        let report = svc.process(None, None).await.unwrap();
        assert_eq!(report.top_items.len(), 2);
        assert_eq!(report.count, 7);
    }

    #[tokio::test]
    async fn test_process_rejects_zero_top_n() {
        let svc = service();
        let err = svc.process(None, Some(0)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation { ref field, .. } if field == "top_n"));
    }

    #[tokio::test]
    async fn test_process_on_empty_store() {
        let svc = service();
        let report = svc.process(Some("laptop"), None).await.unwrap();
        assert_eq!(report, AggregateReport::empty());
    }
}
