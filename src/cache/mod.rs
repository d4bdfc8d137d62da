//! Cache Module
//!
//! In-memory response cache with per-entry TTL expiration.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache store shared between request handlers and the sweep task.
///
/// Hits only take the read lock; inserts and sweeps take the write lock.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store for sharing across tasks.
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}
