//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with first-insertion-order
//! eviction and TTL expiry.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

// == Request Cache ==
/// Bounded key-value store with per-entry TTL and FIFO eviction.
///
/// `capacity` and `ttl_ms` are fixed at construction. Stale entries are
/// removed lazily on [`get`](Self::get) and eagerly by
/// [`sweep_expired`](Self::sweep_expired); both paths share the same clock
/// and the same strictly-greater-than TTL check.
#[derive(Debug)]
pub struct RequestCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// First-insertion order, oldest at the front
    order: InsertionOrder,
    /// Accounting counters
    stats: CacheStats,
    /// Maximum number of live entries
    capacity: usize,
    /// Maximum entry age in milliseconds
    ttl_ms: u64,
    /// Estimated total payload size of live entries
    total_bytes: usize,
}

impl RequestCache {
    // == Constructor ==
    /// Creates a new RequestCache.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; zero means always-miss, never-store
    /// * `ttl_ms` - Maximum entry age in milliseconds
    pub fn new(capacity: usize, ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            capacity,
            ttl_ms,
            total_bytes: 0,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns None if the key is absent or its entry has outlived the TTL;
    /// a stale entry is removed as a side effect. Absence is a normal
    /// outcome, not a failure. Reads do not promote: a hit leaves the key's
    /// eviction position untouched.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = current_timestamp_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now, self.ttl_ms),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.sync_footprint();
            return None;
        }

        let value = self.entries.get(key).map(|entry| entry.value.clone());
        self.stats.record_hit();
        value
    }

    // == Set ==
    /// Stores a key-value pair stamped with the current time.
    ///
    /// At capacity with a new key, exactly one entry is evicted first: the
    /// earliest-inserted key still live. Overwriting an existing key
    /// refreshes its value and timestamp but keeps its position in the
    /// eviction order, so a frequently rewritten key is still evicted at its
    /// first-insertion age. A zero-capacity cache stores nothing.
    pub fn set(&mut self, key: &str, value: Value) {
        if self.capacity == 0 {
            return;
        }

        if let Some(existing) = self.entries.get_mut(key) {
            let fresh = CacheEntry::new(value);
            self.total_bytes = self
                .total_bytes
                .saturating_sub(existing.size_bytes)
                .saturating_add(fresh.size_bytes);
            *existing = fresh;
            self.sync_footprint();
            return;
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_oldest() {
                if let Some(removed) = self.entries.remove(&oldest) {
                    self.total_bytes = self.total_bytes.saturating_sub(removed.size_bytes);
                }
                self.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(value);
        self.total_bytes = self.total_bytes.saturating_add(entry.size_bytes);
        self.entries.insert(key.to_string(), entry);
        self.order.record(key);
        self.sync_footprint();
    }

    // == Sweep Expired ==
    /// Removes every entry whose age strictly exceeds the TTL.
    ///
    /// Bounds memory for write-only keys that the lazy path never touches.
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = current_timestamp_ms();

        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now, self.ttl_ms))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.remove_entry(&key);
            self.stats.record_expiration();
        }

        self.sync_footprint();
        count
    }

    // == Trim To Bytes ==
    /// Evicts oldest-first until the estimated payload footprint fits the
    /// given byte budget.
    ///
    /// Returns the number of entries evicted.
    pub fn trim_to_bytes(&mut self, limit_bytes: usize) -> usize {
        let mut evicted = 0;

        while self.total_bytes > limit_bytes {
            let Some(oldest) = self.order.pop_oldest() else {
                break;
            };
            if let Some(removed) = self.entries.remove(&oldest) {
                self.total_bytes = self.total_bytes.saturating_sub(removed.size_bytes);
            }
            self.stats.record_eviction();
            evicted += 1;
        }

        self.sync_footprint();
        evicted
    }

    // == Stats ==
    /// Returns a snapshot of the accounting counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_footprint(self.entries.len(), self.total_bytes);
        stats
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the fixed entry capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == TTL ==
    /// Returns the fixed TTL in milliseconds.
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    // == Total Bytes ==
    /// Returns the estimated total payload size of live entries.
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    // == Internals ==
    /// Removes an entry keeping storage, order and byte accounting in sync.
    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry> {
        let removed = self.entries.remove(key)?;
        self.order.remove(key);
        self.total_bytes = self.total_bytes.saturating_sub(removed.size_bytes);
        Some(removed)
    }

    /// Refreshes the footprint counters on the stats snapshot.
    fn sync_footprint(&mut self) {
        self.stats.set_footprint(self.entries.len(), self.total_bytes);
    }
}
