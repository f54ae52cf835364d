//! Bounded memoization of fetched-and-shaped API results.

use lru::LruCache;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Size and capacity of one cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheInfo {
    pub size: usize,
    pub capacity: usize,
}

/// An LRU memo table keyed by call arguments.
///
/// Entries live until they are evicted by capacity or removed with
/// [`MemoCache::clear`]. Values are shared as `Arc`s so a hit never copies
/// the shaped data.
#[derive(Debug)]
pub struct MemoCache<K: Hash + Eq, V> {
    name: &'static str,
    entries: RwLock<LruCache<K, Arc<V>>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq + Clone + Debug,
{
    /// Creates a cache holding at most `capacity` entries (at least one).
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        MemoCache {
            name,
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cached value for `key`, marking it most recently used.
    pub async fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(value) => {
                debug!("Cache hit in {}: {:?}", self.name, key);
                Some(Arc::clone(value))
            }
            None => {
                debug!("Cache miss in {}: {:?}", self.name, key);
                None
            }
        }
    }

    /// Stores `value` under `key`, evicting the least recently used entry when full.
    pub async fn insert(&self, key: K, value: V) -> Arc<V> {
        let value = Arc::new(value);
        let mut entries = self.entries.write().await;
        if let Some((evicted, _)) = entries.push(key.clone(), Arc::clone(&value))
            && evicted != key
        {
            debug!("Evicted {:?} from {}", evicted, self.name);
        }
        debug!(
            "Cached {:?} in {} (size {}/{})",
            key,
            self.name,
            entries.len(),
            entries.cap()
        );
        value
    }

    /// Returns the cached value for `key`, or runs `fetch` and caches its result.
    ///
    /// The lock is not held while `fetch` runs. Errors are returned as-is and
    /// nothing is cached for them.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: K, fetch: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key).await {
            return Ok(value);
        }
        let value = fetch().await?;
        Ok(self.insert(key, value).await)
    }

    /// Drops every entry.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let size = entries.len();
        entries.clear();
        info!("Cleared {} ({} entries)", self.name, size);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }

    pub async fn info(&self) -> CacheInfo {
        let entries = self.entries.read().await;
        CacheInfo {
            size: entries.len(),
            capacity: entries.cap().get(),
        }
    }
}
