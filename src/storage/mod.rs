//! Asynchronous key-value stores backing the persisted task list.
//!
//! Every backend stores opaque string values under string keys. What gets
//! written (JSON-encoded state) is decided by [`crate::state::persistence`].

pub mod file;
pub mod memory;
pub mod sqlite;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(String),
    #[error("database error: {0}")]
    Database(String),
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::Io(error.to_string())
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        StorageError::Database(error.to_string())
    }
}

#[async_trait]
pub trait KeyValueStore: fmt::Debug + Send + Sync {
    /// Returns `None` when nothing was ever stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    // Part of the store contract; the app itself only ever overwrites its key.
    #[allow(dead_code)]
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

pub async fn open(config: StorageConfig) -> Result<SharedStore, StorageError> {
    let store: SharedStore = match config.backend {
        StorageBackend::Json => Arc::new(FileStore::new(config.data_dir)),
        StorageBackend::Sqlite => {
            Arc::new(SqliteStore::open(config.data_dir.join("tasks.db")).await?)
        }
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };

    tracing::info!(?store, "storage opened");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use super::*;

    fn config(backend: StorageBackend, data_dir: &Path) -> StorageConfig {
        StorageConfig {
            backend,
            data_dir: data_dir.to_owned(),
            key: "@tasks".into(),
            save_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn json_backend_writes_into_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();

        let store = open(config(StorageBackend::Json, dir.path())).await.unwrap();
        store.set_item("@tasks", "[]").await.unwrap();

        assert!(dir.path().join("_tasks.json").is_file());
        assert!(!dir.path().join("tasks.db").exists());
        assert_eq!(store.get_item("@tasks").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn sqlite_backend_creates_tasks_db() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let store = open(config(StorageBackend::Sqlite, &data_dir)).await.unwrap();
        store.set_item("@tasks", "[]").await.unwrap();

        assert!(data_dir.join("tasks.db").is_file());
        assert!(!data_dir.join("_tasks.json").exists());
        assert_eq!(store.get_item("@tasks").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn memory_backend_leaves_the_disk_alone() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("unused");

        let store = open(config(StorageBackend::Memory, &data_dir)).await.unwrap();
        store.set_item("@tasks", "[]").await.unwrap();

        assert!(!data_dir.exists());
        assert_eq!(store.get_item("@tasks").await.unwrap().as_deref(), Some("[]"));
    }
}
