//! Sample catalog seeding

use catalog_core::{Item, ItemStore, NewItem, Result};
use tracing::info;

/// The fixed demo catalog inserted into an empty store.
pub fn sample_catalog() -> Vec<NewItem> {
    vec![
        NewItem::new("Laptop Pro X", "laptop", 1499.99, 4),
        NewItem::new("Smartphone Z", "smartphone", 899.50, 3),
        NewItem::new("AudioMax Headphones", "headphones", 199.00, 4),
        NewItem::new("UltraWide Monitor", "monitor", 650.0, 2),
        NewItem::new("Laptop Air M2", "laptop", 1299.00, 3),
        NewItem::new("Gamer Headset v2", "headphones", 120.75, 1),
        // No configured weight for this category
        NewItem::new("Smartwatch 5", "wearable", 350.0, 2),
    ]
}

/// Insert the sample catalog if the store holds no items.
///
/// Returns the number of items inserted, zero when the store already had
/// data. Running it twice never duplicates the seed set.
pub async fn seed_if_empty(store: &dyn ItemStore) -> Result<usize> {
    if store.count().await? > 0 {
        info!("Store already contains data, skipping seed");
        return Ok(0);
    }

    info!("Store is empty, seeding sample catalog...");
    let inserted = store.replace_all(&sample_catalog()).await?;
    info!("Seeding complete: {} items", inserted.len());
    Ok(inserted.len())
}

/// Discard everything in the store and insert the sample catalog.
pub async fn reseed(store: &dyn ItemStore) -> Result<Vec<Item>> {
    info!("Resetting store to the sample catalog");
    store.replace_all(&sample_catalog()).await
}
