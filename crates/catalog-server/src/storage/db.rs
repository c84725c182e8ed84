//! SQLite database layer (embedded, no external dependencies)

use super::db_err;
use anyhow::{Context, Result};
use async_trait::async_trait;
use catalog_core::{Item, ItemStore, NewItem};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

const ITEM_COLUMNS: &str = "id, name, category, value, rating";

/// SQLite-backed item store.
///
/// Queries borrow a pooled connection for their own duration only; the pool
/// takes it back on every exit path, including errors.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        let parent = match Path::new(database_path).parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };

        tokio::fs::create_dir_all(&parent)
            .await
            .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;

        // Fail early with a readable message instead of an opaque SQLite error
        let test_file = parent.join(".write_test");
        match tokio::fs::write(&test_file, b"test").await {
            Ok(_) => {
                let _ = tokio::fs::remove_file(&test_file).await;
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Database directory is not writable: {}: {}",
                    parent.display(),
                    e
                ));
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                value REAL NOT NULL,
                rating INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_items_category ON items (category)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ItemStore for Database {
    async fn create(&self, item: &NewItem) -> catalog_core::Result<Item> {
        let row: ItemRow = sqlx::query_as(&format!(
            "INSERT INTO items (name, category, value, rating) VALUES (?1, ?2, ?3, ?4) RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.value)
        .bind(item.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.into())
    }

    async fn get(&self, id: i64) -> catalog_core::Result<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(&format!(
            "SELECT {} FROM items WHERE id = ?1",
            ITEM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self, category: Option<&str>) -> catalog_core::Result<Vec<Item>> {
        let rows: Vec<ItemRow> = sqlx::query_as(&format!(
            "SELECT {} FROM items WHERE ?1 IS NULL OR category = ?1 ORDER BY id",
            ITEM_COLUMNS
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(&self, id: i64, item: &NewItem) -> catalog_core::Result<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(&format!(
            r#"
            UPDATE items SET name = ?1, category = ?2, value = ?3, rating = ?4
            WHERE id = ?5
            RETURNING {}
            "#,
            ITEM_COLUMNS
        ))
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.value)
        .bind(item.rating)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: i64) -> catalog_core::Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> catalog_core::Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(count as u64)
    }

    async fn replace_all(&self, items: &[NewItem]) -> catalog_core::Result<Vec<Item>> {
        // Rolled back on drop unless committed
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        sqlx::query("DELETE FROM items")
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        // Restart AUTOINCREMENT so reseeded ids begin at 1 again
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'items'")
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        let insert = format!(
            "INSERT INTO items (name, category, value, rating) VALUES (?1, ?2, ?3, ?4) RETURNING {}",
            ITEM_COLUMNS
        );
        let mut inserted = Vec::with_capacity(items.len());
        for item in items {
            let row: ItemRow = sqlx::query_as(&insert)
                .bind(&item.name)
                .bind(&item.category)
                .bind(item.value)
                .bind(item.rating)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_err)?;
            inserted.push(row.into());
        }

        tx.commit().await.map_err(db_err)?;

        Ok(inserted)
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    category: String,
    value: f64,
    rating: i64,
}

impl From<ItemRow> for Item {
    fn from(r: ItemRow) -> Self {
        Item {
            id: r.id,
            name: r.name,
            category: r.category,
            value: r.value,
            rating: r.rating,
        }
    }
}
