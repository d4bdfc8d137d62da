//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use bytes::Bytes;

// == Cache Entry ==
/// A serialized response payload together with its insertion time and TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The serialized payload, shared cheaply with every reader
    pub value: Bytes,
    /// When the entry was stored
    pub inserted_at: Instant,
    /// How long the entry stays visible
    pub ttl: Duration,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry inserted now.
    pub fn new(value: Bytes, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the elapsed time is greater than or equal to
    /// its TTL, so a zero TTL entry is never visible.
    pub fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}
