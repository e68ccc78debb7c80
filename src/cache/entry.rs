//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the shared clock.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached payload with its insertion timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached payload, opaque to the cache
    pub value: Value,
    /// Insertion/overwrite timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Estimated serialized size of the payload in bytes
    pub size_bytes: usize,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        let size_bytes = estimate_size(&value);
        Self {
            value,
            inserted_at: current_timestamp_ms(),
            size_bytes,
        }
    }

    // == Age ==
    /// Returns the entry age in milliseconds at the given clock reading.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the TTL at the given clock reading.
    ///
    /// Strictly greater than: an entry whose age equals `ttl_ms` exactly is
    /// still valid. The lazy path and the background sweep both go through
    /// this check so the two cannot diverge.
    pub fn is_expired_at(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }

    /// Checks expiry against the current clock.
    pub fn is_expired(&self, ttl_ms: u64) -> bool {
        self.is_expired_at(current_timestamp_ms(), ttl_ms)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// Single clock source for insertion stamps, lazy expiry and the sweep.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Estimates the resident size of a payload as its serialized JSON length.
fn estimate_size(value: &Value) -> usize {
    serde_json::to_string(value).map(|s| s.len()).unwrap_or(0)
}
