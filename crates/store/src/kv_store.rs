use std::{collections::HashMap, fmt::Display, hash::Hash, sync::Arc};

use tokio::sync::RwLock;
use tracing::info;

use crate::errors::StoreError;

/// Generic in-memory key-value map store.
///
/// Wraps a `HashMap<K, V>` behind one reader-writer lock scoped to the whole
/// map: mutations hold exclusive access for their full duration, lookups take
/// shared access and may run concurrently with each other. Each individual
/// operation is linearizable against the full map state; no compound
/// check-and-set is exposed, so callers must not build check-then-act
/// sequences out of `has` plus a mutation.
#[derive(Clone)]
pub struct KvStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> KvStore<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Create an empty store. Entries live until deleted or process exit.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or overwrite the value for a key. Cannot fail.
    pub async fn put(&self, key: K, value: V) {
        let mut map = self.inner.write().await;
        map.insert(key, value);
    }

    /// Get the current value for a key.
    /// Absence is reported as `NotFound`, never as an empty value.
    pub async fn get(&self, key: &K) -> Result<V, StoreError> {
        let map = self.inner.read().await;
        map.get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Overwrite the value for an existing key; `NotFound` when the key is
    /// absent, leaving the map unchanged. The existence check and the insert
    /// happen under the same write guard.
    pub async fn update(&self, key: K, value: V) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        if !map.contains_key(&key) {
            return Err(StoreError::not_found(&key));
        }
        map.insert(key, value);
        Ok(())
    }

    /// Remove the entry for a key; `NotFound` when absent.
    pub async fn delete(&self, key: &K) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        if map.remove(key).is_none() {
            return Err(StoreError::not_found(key));
        }
        drop(map);
        info!(%key, "key deleted");
        Ok(())
    }

    /// Check whether a key exists. Informational only.
    pub async fn has(&self, key: &K) -> bool {
        let map = self.inner.read().await;
        map.contains_key(key)
    }
}

impl<K, V> Default for KvStore<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
