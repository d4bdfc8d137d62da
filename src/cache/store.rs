//! Cache Store Module
//!
//! Response cache engine: a HashMap of serialized payloads with TTL expiration.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Time-bounded key to payload store.
///
/// Keys are the raw lookup strings exactly as clients sent them. Reads take
/// `&self` so they can run under a shared lock; expired entries stay in the
/// map until the next sweep but are never returned.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// TTL applied to every inserted entry
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expirations: 0,
        }
    }

    // == Set ==
    /// Stores a payload under `key`.
    ///
    /// An existing entry for the same key is overwritten and its TTL restarts.
    pub fn set(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value, self.ttl));
    }

    // == Get ==
    /// Returns the payload for `key` if present and not expired.
    ///
    /// A missing and an expired entry look the same to callers.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();
        self.expirations += removed as u64;
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expirations: self.expirations,
            total_entries: self.entries.len(),
        }
    }

    /// TTL applied to new entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
