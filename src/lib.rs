//! Lookup Cache - A bounded in-memory TTL cache for memoizing backend lookups
//!
//! Request-handling code consults the cache before hitting the authoritative
//! store; entries expire after a fixed TTL and the earliest-inserted entry is
//! evicted when the cache is full. A background sweep reclaims write-only
//! keys and an optional watchdog keeps the payload footprint under a byte
//! budget.

pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod tasks;

pub use cache::RequestCache;
pub use config::Config;
pub use error::LookupError;
pub use lookup::{LookupSource, MemoizedLookup};
pub use tasks::{spawn_memory_watchdog, spawn_sweep_task};
