//! Append-only history backed by whole-collection key-value persistence.
//!
//! Every mutation rewrites the full serialized collection under the
//! store's key. At the data volumes a single user produces this keeps
//! persistence trivially consistent; it does not scale to large
//! histories and is not meant to.
//!
//! The lifecycle gate exists for one race: a save issued before the
//! initial load completes would overwrite previously persisted entries
//! with a near-empty snapshot. A store therefore refuses to append until
//! it has passed through `Loaded`, and loading itself never writes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use amparo_core::Storage;

/// Where a new entry lands in the in-memory sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrder {
    /// Oldest first; new entries go to the end (chat transcript).
    Append,
    /// Newest first; new entries go to the front (mood log).
    Prepend,
}

/// Store lifecycle. Saves are only permitted once the store has
/// transitioned through `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Loaded,
    Dirty,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history store {0:?} used before load()")]
    NotLoaded(String),
}

/// Durable, ordered history of one entry kind under one storage key.
pub struct HistoryStore<T> {
    storage: Arc<dyn Storage>,
    key: String,
    order: InsertOrder,
    entries: Vec<T>,
    lifecycle: Lifecycle,
}

impl<T> HistoryStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>, order: InsertOrder) -> Self {
        Self {
            storage,
            key: key.into(),
            order,
            entries: Vec::new(),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Load previously persisted entries.
    ///
    /// Fail-soft: an absent key, a read error or a corrupt payload all
    /// yield an empty collection and a log line, never an error. Loading
    /// does not write anything back.
    pub async fn load(&mut self) -> &[T] {
        if self.lifecycle != Lifecycle::Uninitialized {
            tracing::debug!("History {:?} already loaded, skipping", self.key);
            return &self.entries;
        }

        match self.storage.get(&self.key).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<T>>(&json) {
                Ok(entries) => {
                    tracing::debug!("Loaded {} entries for {:?}", entries.len(), self.key);
                    self.entries = entries;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to deserialize history {:?}, starting empty: {}",
                        self.key,
                        e
                    );
                    self.entries.clear();
                }
            },
            Ok(None) => {
                tracing::debug!("No persisted history for {:?}", self.key);
            }
            Err(e) => {
                tracing::warn!("Failed to read history {:?}, starting empty: {}", self.key, e);
            }
        }

        self.lifecycle = Lifecycle::Loaded;
        &self.entries
    }

    /// Populate in-memory defaults when nothing was persisted.
    ///
    /// No-op unless the store is freshly `Loaded` and empty. Deliberately
    /// does not persist: defaults only reach storage once a real append
    /// happens (the original-mount guard).
    pub fn seed_if_empty(&mut self, defaults: Vec<T>) {
        if self.lifecycle == Lifecycle::Loaded && self.entries.is_empty() {
            self.entries = defaults;
        }
    }

    /// Insert a new entry and persist the whole updated collection.
    ///
    /// Write failures are logged and swallowed — the in-memory state
    /// stays authoritative for the session. The only hard error is
    /// appending before `load()`.
    pub async fn append(&mut self, entry: T) -> Result<(), StoreError> {
        if self.lifecycle == Lifecycle::Uninitialized {
            return Err(StoreError::NotLoaded(self.key.clone()));
        }

        match self.order {
            InsertOrder::Append => self.entries.push(entry),
            InsertOrder::Prepend => self.entries.insert(0, entry),
        }

        self.persist().await;
        self.lifecycle = Lifecycle::Dirty;
        Ok(())
    }

    /// Rewrite the full serialized collection under this store's key.
    /// Last-writer-wins on the latest in-memory snapshot.
    async fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize history {:?}: {}", self.key, e);
                return;
            }
        };

        if let Err(e) = self.storage.put(&self.key, &json).await {
            tracing::error!("Failed to persist history {:?}: {}", self.key, e);
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use async_trait::async_trait;

    struct FailingStorage;

    #[async_trait]
    impl Storage for FailingStorage {
        async fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("disk on fire")
        }

        async fn put(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk on fire")
        }
    }

    #[tokio::test]
    async fn test_append_before_load_is_refused() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store: HistoryStore<u32> = HistoryStore::new(storage, "k", InsertOrder::Append);
        let err = store.append(1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotLoaded(_)));
        assert_eq!(store.lifecycle(), Lifecycle::Uninitialized);
    }

    #[tokio::test]
    async fn test_load_empty_then_append() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store: HistoryStore<u32> =
            HistoryStore::new(storage.clone(), "k", InsertOrder::Append);

        assert!(store.load().await.is_empty());
        assert_eq!(store.lifecycle(), Lifecycle::Loaded);

        store.append(1).await.unwrap();
        store.append(2).await.unwrap();
        assert_eq!(store.entries(), &[1, 2]);
        assert_eq!(store.lifecycle(), Lifecycle::Dirty);

        // Whole collection replaced under the key
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("[1,2]"));
    }

    #[tokio::test]
    async fn test_prepend_order_is_newest_first() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store: HistoryStore<String> =
            HistoryStore::new(storage, "k", InsertOrder::Prepend);

        store.load().await;
        store.append("Feliz".to_string()).await.unwrap();
        store.append("Triste".to_string()).await.unwrap();
        assert_eq!(store.entries(), &["Triste".to_string(), "Feliz".to_string()]);
    }

    #[tokio::test]
    async fn test_corrupt_payload_fails_soft_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.put("k", "{not json").await.unwrap();

        let mut store: HistoryStore<u32> =
            HistoryStore::new(storage, "k", InsertOrder::Append);
        assert!(store.load().await.is_empty());
        assert_eq!(store.lifecycle(), Lifecycle::Loaded);
    }

    #[tokio::test]
    async fn test_read_failure_fails_soft_to_empty() {
        let mut store: HistoryStore<u32> =
            HistoryStore::new(Arc::new(FailingStorage), "k", InsertOrder::Append);
        assert!(store.load().await.is_empty());
        assert_eq!(store.lifecycle(), Lifecycle::Loaded);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_authoritative() {
        let mut store: HistoryStore<u32> =
            HistoryStore::new(Arc::new(FailingStorage), "k", InsertOrder::Append);
        store.load().await;
        store.append(7).await.unwrap();
        assert_eq!(store.entries(), &[7]);
        assert_eq!(store.lifecycle(), Lifecycle::Dirty);
    }

    #[tokio::test]
    async fn test_seed_if_empty_does_not_persist() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store: HistoryStore<u32> =
            HistoryStore::new(storage.clone(), "k", InsertOrder::Append);

        store.load().await;
        store.seed_if_empty(vec![99]);
        assert_eq!(store.entries(), &[99]);

        // Nothing written until a real append
        assert_eq!(storage.get("k").await.unwrap(), None);

        store.append(1).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("[99,1]"));
    }

    #[tokio::test]
    async fn test_seed_is_ignored_when_entries_were_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        storage.put("k", "[5]").await.unwrap();

        let mut store: HistoryStore<u32> =
            HistoryStore::new(storage, "k", InsertOrder::Append);
        store.load().await;
        store.seed_if_empty(vec![99]);
        assert_eq!(store.entries(), &[5]);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store: HistoryStore<u32> =
            HistoryStore::new(storage.clone(), "k", InsertOrder::Append);
        store.load().await;
        store.append(1).await.unwrap();

        // A second load must not clobber in-memory state
        store.load().await;
        assert_eq!(store.entries(), &[1]);
        assert_eq!(store.lifecycle(), Lifecycle::Dirty);
    }
}
