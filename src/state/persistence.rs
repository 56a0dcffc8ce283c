use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::{SharedStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to read stored state: {0}")]
    Storage(#[from] StorageError),
    #[error("stored state is malformed: {0}")]
    Format(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("failed to write state: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to encode state: {0}")]
    Format(String),
}

/// Reads `key` and decodes it. `Ok(None)` means nothing was stored yet.
pub async fn load<S>(store: SharedStore, key: String) -> Result<Option<S>, LoadError>
where
    S: DeserializeOwned,
{
    let Some(contents) = store.get_item(&key).await? else {
        tracing::debug!(%key, "nothing stored yet");
        return Ok(None);
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|error| LoadError::Format(error.to_string()))
}

/// Encodes and writes `state` under `key`.
pub async fn save<S>(store: SharedStore, key: String, state: S) -> Result<(), SaveError>
where
    S: Serialize,
{
    let json =
        serde_json::to_string_pretty(&state).map_err(|error| SaveError::Format(error.to_string()))?;

    store.set_item(&key, &json).await?;
    tracing::debug!(%key, bytes = json.len(), "state written");

    Ok(())
}

/// The pause after a write during which further changes are batched up.
pub async fn cooldown(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::state::Reducer;
    use crate::task::{TaskAction, TaskList, Title};

    #[tokio::test]
    async fn missing_key_loads_as_none() {
        let store: SharedStore = Arc::new(MemoryStore::new());

        let loaded = load::<TaskList>(store, "@tasks".into()).await;

        assert_eq!(loaded, Ok(None));
    }

    #[tokio::test]
    async fn saved_state_loads_back() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let title = Title::parse("water plants").unwrap();
        let tasks = TaskList::default().reduce(TaskAction::add(title));

        save(store.clone(), "@tasks".into(), tasks.clone()).await.unwrap();
        let loaded = load::<TaskList>(store, "@tasks".into()).await.unwrap();

        assert_eq!(loaded, Some(tasks));
    }

    #[tokio::test]
    async fn malformed_json_is_a_format_error() {
        let memory = MemoryStore::new();
        memory.set_item("@tasks", "{not json").await.unwrap();
        let store: SharedStore = Arc::new(memory);

        let loaded = load::<TaskList>(store, "@tasks".into()).await;

        assert!(matches!(loaded, Err(LoadError::Format(_))));
    }
}
