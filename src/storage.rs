// src/storage.rs

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;

/// Durable key-value slot storage.
///
/// Every piece of persisted state (per-player attempt lists, progress
/// snapshots, the daily trivia marker and cached fact) lives in a named
/// slot holding a serialized JSON payload. Handlers only see this trait,
/// so tests substitute [`MemoryStore`] for the database.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Postgres-backed slot store over the `kv_slots` table.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PgStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_slots WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read slot '{}': {:?}", key, e);
                AppError::InternalServerError(e.to_string())
            })?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO kv_slots (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM kv_slots WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// In-memory slot store. Backs the test suites.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.slots
            .lock()
            .map_err(|_| AppError::InternalServerError("slot store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trips_values() {
        let store = MemoryStore::new();

        store.set("slot", "payload").await.unwrap();
        assert_eq!(store.get("slot").await.unwrap(), Some("payload".to_string()));

        store.set("slot", "replaced").await.unwrap();
        assert_eq!(store.get("slot").await.unwrap(), Some("replaced".to_string()));
    }

    #[tokio::test]
    async fn memory_store_remove_is_idempotent() {
        let store = MemoryStore::new();

        store.set("slot", "payload").await.unwrap();
        store.remove("slot").await.unwrap();
        assert_eq!(store.get("slot").await.unwrap(), None);

        // Removing again must not fail.
        store.remove("slot").await.unwrap();
        assert_eq!(store.get("slot").await.unwrap(), None);
    }

    #[tokio::test]
    async fn memory_store_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("never-written").await.unwrap(), None);
    }
}
