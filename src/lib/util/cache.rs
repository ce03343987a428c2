//! Module implementing a thread-safe LRU cache.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use antidote::Mutex;
use lru_cache::LruCache;


/// A thread-safe cache of keys & cached values.
/// Actual values stored in the cache are `Arc<V>`s,
/// so they can be handed out while the cache keeps its copy.
///
/// This is a wrapper around `LruCache` that also counts cache hits and misses.
pub struct ThreadSafeCache<K: Eq + Hash, V> {
    inner: Mutex<LruCache<K, Arc<V>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Create the cache with given capacity.
    pub fn new(capacity: usize) -> Self {
        ThreadSafeCache{
            inner: Mutex::new(LruCache::new(capacity)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }
}

impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Get the element corresponding to given key if it's present in the cache.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        let value = self.inner.lock().get_mut(key).cloned();
        let counter = if value.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        value
    }

    /// Put an item into the cache under given key
    /// and return the shared value that is now cached.
    pub fn put(&self, k: K, v: V) -> Arc<V> {
        let value = Arc::new(v);
        self.inner.lock().insert(k, value.clone());
        value
    }

    /// Cache capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Current size of the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Remove all elements from the cache.
    ///
    /// Statistics are preserved.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}

// Statistics.
impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Returns the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

impl<K: Eq + Hash, V> fmt::Debug for ThreadSafeCache<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let inner = self.inner.lock();
        fmt.debug_struct("ThreadSafeCache")
            .field("capacity", &inner.capacity())
            .field("len", &inner.len())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use spectral::prelude::*;
    use super::ThreadSafeCache;

    #[test]
    fn counts_hits_and_misses() {
        let cache = ThreadSafeCache::new(4);
        assert_that!(cache.get("impact")).is_none();
        cache.put("impact".to_owned(), 1);
        assert_that!(cache.get("impact")).is_some().is_equal_to(Arc::new(1));
        assert_that!(cache.get("arial")).is_none();

        assert_eq!(1, cache.hits());
        assert_eq!(2, cache.misses());
    }

    #[test]
    fn evicts_least_recently_used() {
        let cache = ThreadSafeCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get("a");
        cache.put("c", 3);

        assert_eq!(2, cache.len());
        assert_that!(cache.get("b")).is_none();
        assert_that!(cache.get("a")).is_some();
        assert_that!(cache.get("c")).is_some();
    }

    #[test]
    fn clear_keeps_statistics() {
        let cache = ThreadSafeCache::new(2);
        cache.put(1, "one");
        cache.get(&1);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(2, cache.capacity());
        assert_eq!(1, cache.hits());
    }
}
