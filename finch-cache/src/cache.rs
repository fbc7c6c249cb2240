//! In-memory TTL cache for known-miss identifiers.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Cache entry with its insertion time.
#[derive(Clone)]
struct CacheEntry {
    value: bool,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MissCacheConfig {
    /// Maximum number of live entries
    pub max_entries: usize,
    /// Entry TTL in milliseconds
    pub ttl_millis: u64,
}

impl Default for MissCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            ttl_millis: 300_000,
        }
    }
}

impl MissCacheConfig {
    /// Returns the TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_millis)
    }
}

/// In-memory cache of identifiers confirmed not to resolve upstream.
///
/// Thread-safe; `get` and `put` are individually atomic and callers need
/// no external locking. Neither operation performs any I/O. Entries expire
/// after the configured TTL and the size is bounded: when full, the
/// oldest-inserted entry is evicted to admit a new key.
pub struct MissCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: MissCacheConfig,
}

impl MissCache {
    /// Creates a cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(MissCacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: MissCacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.max_entries)),
            config,
        }
    }

    /// Returns true if a live, unexpired miss entry exists for `key`.
    ///
    /// Expired entries are treated as absent.
    pub fn get(&self, key: &str) -> bool {
        let entries = self.entries.read();
        entries
            .get(key)
            .map(|e| !e.is_expired(self.config.ttl()) && e.value)
            .unwrap_or(false)
    }

    /// Inserts or overwrites the entry for `key`, resetting its expiry clock.
    ///
    /// If the cache is at capacity and `key` is new, expired entries are
    /// purged first and then the oldest-inserted entry is evicted.
    pub fn put(&self, key: &str, value: bool) {
        let mut entries = self.entries.write();

        if !entries.contains_key(key) && entries.len() >= self.config.max_entries {
            let ttl = self.config.ttl();
            entries.retain(|_, e| !e.is_expired(ttl));
            while entries.len() >= self.config.max_entries {
                if let Some(oldest_key) = entries
                    .iter()
                    .min_by_key(|(_, e)| e.inserted_at)
                    .map(|(k, _)| k.clone())
                {
                    entries.remove(&oldest_key);
                } else {
                    break;
                }
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Removes the entry for `key`, if any.
    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Clears all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> MissCacheStats {
        let entries = self.entries.read();
        let expired = entries
            .values()
            .filter(|e| e.is_expired(self.config.ttl()))
            .count();
        MissCacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            live_entries: entries.len().saturating_sub(expired),
            capacity: self.config.max_entries,
        }
    }
}

impl Default for MissCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug)]
pub struct MissCacheStats {
    /// Stored entries, expired ones included.
    pub total_entries: usize,
    /// Entries past their TTL, pending purge.
    pub expired_entries: usize,
    /// Entries still visible to `get`.
    pub live_entries: usize,
    /// Configured capacity.
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_cache(max_entries: usize, ttl_millis: u64) -> MissCache {
        MissCache::with_config(MissCacheConfig {
            max_entries,
            ttl_millis,
        })
    }

    #[test]
    fn test_absent_key_is_not_a_miss() {
        let cache = MissCache::new();
        assert!(!cache.get("name:nobody"));
    }

    #[test]
    fn test_put_then_get() {
        let cache = MissCache::new();
        cache.put("name:alice", true);
        assert!(cache.get("name:alice"));
    }

    #[test]
    fn test_false_value_is_not_a_miss() {
        let cache = MissCache::new();
        cache.put("name:alice", false);
        assert!(!cache.get("name:alice"));
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = small_cache(10, 20);
        cache.put("name:alice", true);
        std::thread::sleep(Duration::from_millis(50));
        assert!(!cache.get("name:alice"));
    }

    #[test]
    fn test_put_resets_expiry_clock() {
        let cache = small_cache(10, 60);
        cache.put("name:alice", true);
        std::thread::sleep(Duration::from_millis(40));
        cache.put("name:alice", true);
        std::thread::sleep(Duration::from_millis(40));
        // 80ms after the first put, 40ms after the second: still live.
        assert!(cache.get("name:alice"));
    }

    #[test]
    fn test_put_is_idempotent() {
        let cache = MissCache::new();
        cache.put("name:alice", true);
        cache.put("name:alice", true);
        assert!(cache.get("name:alice"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest_first() {
        let cache = small_cache(2, 100);
        cache.put("name:alice", true);
        cache.put("name:bob", true);
        cache.put("name:carol", true);
        assert!(!cache.get("name:alice"));
        assert!(cache.get("name:bob"));
        assert!(cache.get("name:carol"));
        assert_eq!(cache.len(), 2);

        std::thread::sleep(Duration::from_millis(150));
        assert!(!cache.get("name:bob"));
        assert!(!cache.get("name:carol"));
    }

    #[test]
    fn test_overwrite_at_capacity_evicts_nothing() {
        let cache = small_cache(2, 10_000);
        cache.put("name:alice", true);
        cache.put("name:bob", true);
        cache.put("name:alice", true);
        assert!(cache.get("name:alice"));
        assert!(cache.get("name:bob"));
    }

    #[test]
    fn test_capacity_prefers_purging_expired() {
        let cache = small_cache(2, 30);
        cache.put("name:alice", true);
        std::thread::sleep(Duration::from_millis(60));
        cache.put("name:bob", true);
        cache.put("name:carol", true);
        // Alice had expired, so bob did not need to be evicted.
        assert!(cache.get("name:bob"));
        assert!(cache.get("name:carol"));
    }

    #[test]
    fn test_remove() {
        let cache = MissCache::new();
        cache.put("name:alice", true);
        cache.remove("name:alice");
        assert!(!cache.get("name:alice"));
    }

    #[test]
    fn test_clear() {
        let cache = MissCache::new();
        cache.put("name:alice", true);
        cache.put("name:bob", true);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_stats() {
        let cache = small_cache(5, 10_000);
        cache.put("name:alice", true);
        cache.put("name:bob", true);
        let stats = cache.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.live_entries, 2);
        assert_eq!(stats.capacity, 5);
    }

    #[test]
    fn test_concurrent_access() {
        use std::sync::Arc;

        let cache = Arc::new(small_cache(64, 10_000));
        let mut handles = Vec::new();
        for t in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("id:{}", t * 100 + i);
                    cache.put(&key, true);
                    cache.get(&key);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.len() <= 64);
    }
}
