//! Cache Module
//!
//! Bounded in-memory key-value caching with TTL expiry and
//! first-insertion-order (FIFO) eviction.

mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::RequestCache;
