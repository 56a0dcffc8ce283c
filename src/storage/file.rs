use std::path::PathBuf;

use async_trait::async_trait;

use super::{KeyValueStore, StorageError};

/// One JSON document per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        tokio::fs::create_dir_all(&self.dir).await?;

        // Rename over the old file so a crash mid-write never leaves half a document.
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, value.as_bytes()).await?;
        tokio::fs::rename(&staging, &path).await?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_safe_file_names() {
        let store = FileStore::new("/data");

        assert_eq!(store.path_for("@tasks"), PathBuf::from("/data/_tasks.json"));
        assert_eq!(
            store.path_for("../escape"),
            PathBuf::from("/data/.._escape.json")
        );
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.get_item("@tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_creates_the_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("data"));

        store.set_item("@tasks", "[]").await.unwrap();
        store.set_item("@tasks", "[1]").await.unwrap();

        assert_eq!(store.get_item("@tasks").await.unwrap().as_deref(), Some("[1]"));
        assert!(!store.path_for("@tasks").with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set_item("k", "v").await.unwrap();
        store.remove_item("k").await.unwrap();
        store.remove_item("k").await.unwrap();

        assert_eq!(store.get_item("k").await.unwrap(), None);
    }
}
