//! Memory Watchdog Task
//!
//! Background task that keeps the cache's estimated payload footprint under
//! a configured byte budget by trimming oldest-first. This is the explicit
//! counterpart of leaning on the runtime to reclaim an unbounded cache: when
//! the budget is exceeded, entries are dropped directly.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::RequestCache;

/// Spawns a background task that enforces a payload byte budget.
///
/// On every tick the task reads the cache's estimated footprint; when it
/// exceeds `limit_bytes`, the cache is trimmed oldest-first until it fits.
/// The check itself takes only a read lock, so quiet ticks never contend
/// with writers.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `limit_bytes` - Payload byte budget
/// * `check_interval_ms` - Interval between checks in milliseconds
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during shutdown.
pub fn spawn_memory_watchdog(
    cache: Arc<RwLock<RequestCache>>,
    limit_bytes: usize,
    check_interval_ms: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_millis(check_interval_ms);

    tokio::spawn(async move {
        info!(
            "Starting memory watchdog with budget of {} bytes, checking every {:?}",
            limit_bytes, interval
        );

        loop {
            tokio::time::sleep(interval).await;

            let bytes = {
                let cache = cache.read().await;
                cache.total_bytes()
            };

            if bytes <= limit_bytes {
                debug!("Memory watchdog: {} of {} bytes in use", bytes, limit_bytes);
                continue;
            }

            warn!(
                "Memory budget exceeded: {} of {} bytes, trimming",
                bytes, limit_bytes
            );

            let evicted = {
                let mut cache = cache.write().await;
                cache.trim_to_bytes(limit_bytes)
            };

            info!("Memory watchdog: trimmed {} entries", evicted);
        }
    })
}
