//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries. The lazy
//! check on `get` only covers keys that are read again; the sweep bounds
//! memory for keys that are written once and never read.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::RequestCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The sweep period equals the cache TTL, so an unread entry survives at
/// most one extra period past its expiry. The write lock is held only for
/// the duration of a single scan; the task runs until aborted.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during shutdown.
pub fn spawn_sweep_task(cache: Arc<RwLock<RequestCache>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = {
            let cache = cache.read().await;
            Duration::from_millis(cache.ttl_ms())
        };

        info!("Starting TTL sweep task with period of {:?}", period);

        loop {
            tokio::time::sleep(period).await;

            let removed = {
                let mut cache = cache.write().await;
                cache.sweep_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
