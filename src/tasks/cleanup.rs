//! TTL Cleanup Task
//!
//! Background task that periodically removes expired question cache entries.
//! Only started when a cache TTL is configured.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::QuestionCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// Returns `None` without spawning anything when the cache has no TTL,
/// since entries then only leave through eviction or invalidation.
///
/// # Arguments
/// * `cache` - handle to the shared question cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Example
/// ```ignore
/// let cache = QuestionCache::with_ttl(100, Some(300));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// if let Some(handle) = cleanup_handle { handle.abort(); }
/// ```
pub fn spawn_cleanup_task(
    cache: QuestionCache,
    cleanup_interval_secs: u64,
) -> Option<JoinHandle<()>> {
    let ttl = cache.ttl()?;
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    Some(tokio::spawn(async move {
        info!(
            "Starting question cache cleanup task (ttl={}s, interval={}s)",
            ttl,
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired();
            if removed > 0 {
                info!("Cache cleanup: removed {} expired questions", removed);
            } else {
                debug!("Cache cleanup: no expired questions found");
            }
        }
    }))
}
