//! Cache Sweep Task
//!
//! Background task that periodically removes expired response cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The sweep runs independently of request traffic, so an expired entry is
/// reclaimed at most one `interval` after its deadline. Lookups never see
/// expired entries in the meantime.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = shared(CacheStore::new(Duration::from_secs(60)));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: SharedCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.sweep_expired();
                (removed, cache_guard.stats())
            };

            if removed > 0 {
                info!(
                    "Cache sweep: removed {} expired entries ({} left, hit rate {:.2})",
                    removed,
                    stats.total_entries,
                    stats.hit_rate()
                );
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
