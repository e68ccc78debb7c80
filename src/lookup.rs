//! Memoized Lookup Module
//!
//! Wraps an authoritative lookup source (typically a document-store query)
//! with the bounded TTL cache: a hit skips the source entirely, a miss falls
//! through to the source and populates the cache on success.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::RequestCache;
use crate::error::{LookupError, Result};

// == Lookup Source ==
/// An authoritative source of values keyed by string.
///
/// `Ok(None)` means the key genuinely has no value; that outcome is not
/// cached. Failures are opaque to this crate.
#[async_trait]
pub trait LookupSource: Send + Sync {
    /// Resolves a key against the authoritative store.
    async fn fetch(&self, key: &str) -> anyhow::Result<Option<Value>>;
}

// == Memoized Lookup ==
/// A lookup source fronted by a shared [`RequestCache`].
///
/// The cache handle is owned explicitly and can be shared with the
/// background tasks; there is no process-global state.
pub struct MemoizedLookup<S> {
    cache: Arc<RwLock<RequestCache>>,
    source: S,
}

impl<S: LookupSource> MemoizedLookup<S> {
    // == Constructor ==
    /// Creates a new memoized lookup over the given cache and source.
    pub fn new(cache: Arc<RwLock<RequestCache>>, source: S) -> Self {
        Self { cache, source }
    }

    /// Returns a handle to the underlying cache, for sharing with the
    /// sweep and watchdog tasks.
    pub fn cache(&self) -> Arc<RwLock<RequestCache>> {
        Arc::clone(&self.cache)
    }

    /// Returns a reference to the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    // == Get ==
    /// Resolves a key, consulting the cache first.
    ///
    /// On a miss the source is queried and, if it yields a value, the cache
    /// is populated for subsequent requests. The cache lock is never held
    /// across the source call.
    pub async fn get(&self, key: &str) -> Result<Option<Value>> {
        {
            let mut cache = self.cache.write().await;
            if let Some(value) = cache.get(key) {
                debug!(key, "cache hit");
                return Ok(Some(value));
            }
        }

        debug!(key, "cache miss, querying source");
        let fetched = self
            .source
            .fetch(key)
            .await
            .map_err(|source| LookupError::Source {
                key: key.to_string(),
                source,
            })?;

        if let Some(value) = &fetched {
            let mut cache = self.cache.write().await;
            cache.set(key, value.clone());
        }

        Ok(fetched)
    }
}
