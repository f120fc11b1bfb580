use std::{fmt::Display, hash::Hash};

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::kv_store::KvStore;

/// Trait abstraction for key-value storage.
/// Implementations can be in-memory, file-backed, or remote KV.
#[async_trait]
pub trait Storer<K, V>: Send + Sync
where
    K: Send + Sync,
    V: Send + Sync,
{
    async fn put(&self, key: K, value: V);
    async fn get(&self, key: &K) -> Result<V, StoreError>;
    async fn update(&self, key: K, value: V) -> Result<(), StoreError>;
    async fn delete(&self, key: &K) -> Result<(), StoreError>;
    async fn has(&self, key: &K) -> bool;
}

#[async_trait]
impl<K, V> Storer<K, V> for KvStore<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync,
    V: Clone + Send + Sync,
{
    async fn put(&self, key: K, value: V) {
        KvStore::put(self, key, value).await
    }

    async fn get(&self, key: &K) -> Result<V, StoreError> {
        KvStore::get(self, key).await
    }

    async fn update(&self, key: K, value: V) -> Result<(), StoreError> {
        KvStore::update(self, key, value).await
    }

    async fn delete(&self, key: &K) -> Result<(), StoreError> {
        KvStore::delete(self, key).await
    }

    async fn has(&self, key: &K) -> bool {
        KvStore::has(self, key).await
    }
}
