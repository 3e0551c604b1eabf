use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::item::{Item, ItemDraft};

/// SQLite-backed item storage.
///
/// One pool per process; each operation acquires a connection from the pool
/// for its own duration, so a failed operation never leaks a handle across
/// repeated view opens.
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Open (creating if missing) the store at the given database path
    pub async fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path.display()))
            .map_err(|e| StoreError::storage_unavailable(db_path, e))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::storage_unavailable(db_path, e))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Open an in-memory store (tests).
    ///
    /// Pinned to a single connection: each in-memory SQLite connection is
    /// its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Idempotently create the backing table if absent
    pub async fn ensure_schema(&self) -> Result<()> {
        let schema = include_str!("schema.sql");
        sqlx::raw_sql(schema).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new item and return it with its assigned id.
    ///
    /// A barcode collision surfaces as [`StoreError::DuplicateBarcode`]
    /// rather than a generic database error.
    pub async fn add(&self, draft: &ItemDraft) -> Result<Item> {
        let result = sqlx::query("INSERT INTO items (name, description, barcode) VALUES (?, ?, ?)")
            .bind(draft.name())
            .bind(draft.description())
            .bind(draft.barcode())
            .execute(&self.pool)
            .await;

        let result = match result {
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(StoreError::duplicate_barcode(draft.barcode()));
            }
            other => other?,
        };

        let id = result.last_insert_rowid();
        debug!(id, barcode = draft.barcode(), "item added");

        Ok(Item {
            id,
            name: draft.name().to_string(),
            description: draft.description().to_string(),
            barcode: draft.barcode().to_string(),
        })
    }

    /// All items in insertion order
    pub async fn list_all(&self) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, barcode FROM items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Items whose name, description, or barcode contains `query` as a
    /// case-insensitive substring. The empty query matches everything.
    ///
    /// Matching is explicitly case-insensitive (both sides lowered) and the
    /// query is always treated literally: `%`, `_`, and `\` in user input
    /// are escaped before being wrapped in LIKE wildcards.
    pub async fn search(&self, query: &str) -> Result<Vec<Item>> {
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, barcode
            FROM items
            WHERE LOWER(name) LIKE ? ESCAPE '\'
               OR LOWER(description) LIKE ? ESCAPE '\'
               OR LOWER(barcode) LIKE ? ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(query, hits = items.len(), "search");
        Ok(items)
    }

    /// Delete every item with this exact barcode, returning the number of
    /// rows removed. Zero matches is a no-op, not an error.
    pub async fn delete_by_barcode(&self, barcode: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM items WHERE barcode = ?")
            .bind(barcode)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected();
        debug!(barcode, removed, "delete by barcode");
        Ok(removed)
    }

    /// Count total items
    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Escape LIKE wildcards so user input matches literally.
/// The escape character itself must be escaped first.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn draft(name: &str, description: &str, barcode: &str) -> ItemDraft {
        ItemDraft::new(name, description, barcode).unwrap()
    }

    #[tokio::test]
    async fn test_open_store_creates_file() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("items.db");

        let store = ItemStore::open(&db_path).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let store = ItemStore::in_memory().await.unwrap();
        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let store = ItemStore::in_memory().await.unwrap();

        let item = store.add(&draft("Jacket", "Blue, size M", "A100")).await.unwrap();
        assert_eq!(item.name, "Jacket");
        assert_eq!(item.barcode, "A100");

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], item);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = ItemStore::in_memory().await.unwrap();
        store.add(&draft("Scarf", "Red wool", "B200")).await.unwrap();
        store.add(&draft("Jacket", "Blue, size M", "A100")).await.unwrap();

        let all = store.list_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Scarf", "Jacket"]);
    }

    #[tokio::test]
    async fn test_duplicate_barcode_rejected() {
        let store = ItemStore::in_memory().await.unwrap();
        store.add(&draft("Jacket", "Blue, size M", "A100")).await.unwrap();

        let err = store
            .add(&draft("Scarf", "Red wool", "A100"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateBarcode { ref barcode } if barcode == "A100"));

        // First record untouched
        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Jacket");
    }

    #[tokio::test]
    async fn test_search_empty_query_matches_everything() {
        let store = ItemStore::in_memory().await.unwrap();
        store.add(&draft("Jacket", "Blue, size M", "A100")).await.unwrap();
        store.add(&draft("Scarf", "Red wool", "B200")).await.unwrap();

        let hits = store.search("").await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = ItemStore::in_memory().await.unwrap();
        store.add(&draft("Jacket", "Blue, size M", "A100")).await.unwrap();
        store.add(&draft("Scarf", "Red wool", "B200")).await.unwrap();

        let hits = store.search("blue").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jacket");

        // Barcode column is searched too
        let hits = store.search("b2").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Scarf");

        let hits = store.search("Z999").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let store = ItemStore::in_memory().await.unwrap();
        store.add(&draft("Charger", "100% original", "C300")).await.unwrap();
        store.add(&draft("Notebook", "plain paper", "D400")).await.unwrap();

        // A bare '%' must not match every row
        let hits = store.search("100%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Charger");

        let hits = store.search("%").await.unwrap();
        assert_eq!(hits.len(), 1);

        let hits = store.search("_").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_barcode() {
        let store = ItemStore::in_memory().await.unwrap();
        store.add(&draft("Jacket", "Blue, size M", "A100")).await.unwrap();

        let removed = store.delete_by_barcode("A100").await.unwrap();
        assert_eq!(removed, 1);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_absent_barcode_is_noop() {
        let store = ItemStore::in_memory().await.unwrap();
        store.add(&draft("Jacket", "Blue, size M", "A100")).await.unwrap();

        let removed = store.delete_by_barcode("Z999").await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
