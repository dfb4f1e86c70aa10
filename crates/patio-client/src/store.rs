//! Durable token storage.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;

/// Storage key for the bearer token. The only key the client uses.
pub const TOKEN_KEY: &str = "token";

/// Durable key-value storage for session credentials.
///
/// Failures are logged and absorbed by the session layer; no operation is
/// retried.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Token store backed by a single JSON object file.
///
/// The whole file is read and rewritten per operation; with one key and one
/// writer that is all the durability the client needs.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_entries(&self) -> Result<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("corrupt token store at {}", self.path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", self.path.display()))
            }
        }
    }

    async fn write_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // A store file we cannot parse holds nothing worth keeping.
        let mut entries = self.read_entries().await.unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries().await.unwrap_or_default();
        entries.remove(key);
        self.write_entries(&entries).await
    }
}

/// In-process token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("token store lock poisoned")
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("token store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("token store lock poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(test: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("patio-store-{}-{}", std::process::id(), test))
            .join("session.json")
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let path = scratch_path("roundtrip");
        let store = FileTokenStore::new(&path);

        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);

        store.set(TOKEN_KEY, "tok-123").await.unwrap();
        assert_eq!(
            store.get(TOKEN_KEY).await.unwrap().as_deref(),
            Some("tok-123")
        );

        store.remove(TOKEN_KEY).await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);

        tokio::fs::remove_dir_all(path.parent().unwrap()).await.ok();
    }

    #[tokio::test]
    async fn test_file_store_set_replaces_corrupt_file() {
        let path = scratch_path("corrupt");
        tokio::fs::create_dir_all(path.parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(&path, b"not json").await.unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.get(TOKEN_KEY).await.is_err());

        store.set(TOKEN_KEY, "fresh").await.unwrap();
        assert_eq!(
            store.get(TOKEN_KEY).await.unwrap().as_deref(),
            Some("fresh")
        );

        tokio::fs::remove_dir_all(path.parent().unwrap()).await.ok();
    }

    #[tokio::test]
    async fn test_remove_discards_unreadable_store() {
        let path = scratch_path("remove-corrupt");
        tokio::fs::create_dir_all(path.parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(&path, b"{{{{").await.unwrap();

        let store = FileTokenStore::new(&path);
        store.remove(TOKEN_KEY).await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);

        tokio::fs::remove_dir_all(path.parent().unwrap()).await.ok();
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        store.set(TOKEN_KEY, "tok").await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some("tok"));
        store.remove(TOKEN_KEY).await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    }
}
